//! View components driven against the in-memory records API double.

use serde_json::json;

use acadmin_client::{MockRecordsApi, RecordsApi};
use acadmin_common::AdminError;
use acadmin_views::state::ViewState;
use acadmin_views::{cohorts, degrees, modules, students};

fn seeded() -> MockRecordsApi {
    MockRecordsApi::new()
        .with_degree("COMSCI1", "Computer Science")
        .with_cohort("COMSCI1-Y1", 1, "COMSCI1")
        .with_module("CS101", "Programming Fundamentals", 50, &["COMSCI1-Y1"])
        .with_student("S1", "Ada", "Lovelace", "COMSCI1-Y1")
        .with_student("S2", "Alan", "Turing", "COMSCI1-Y1")
}

#[tokio::test]
async fn cohort_detail_loads_with_resolved_degree_and_no_students() {
    let api = MockRecordsApi::new().with_cohort("COMSCI1-Y1", 1, "COMSCI1");
    let state = cohorts::cohort_detail(&api, "COMSCI1-Y1").await;
    match state {
        ViewState::Loaded { data } => {
            assert_eq!(data.cohort.degree, "COMSCI1");
            assert_eq!(data.cohort.year, 1);
            assert!(data.students.is_empty());
        }
        other => panic!("expected loaded, got {other:?}"),
    }
}

#[tokio::test]
async fn detail_view_errors_when_one_required_fetch_fails() {
    // The cohort collection resolves, the student list rejects: the view
    // must settle as error, never loaded.
    let api = MockRecordsApi::new()
        .with_cohort("COMSCI1-Y1", 1, "COMSCI1")
        .broken_endpoint("list_students");
    let state = cohorts::cohort_detail(&api, "COMSCI1-Y1").await;
    assert!(matches!(state, ViewState::Error { .. }));
}

#[tokio::test]
async fn join_then_filter_miss_is_not_found_not_error() {
    let api = seeded();
    let state = degrees::degree_detail(&api, "NOSUCH").await;
    assert_eq!(state, ViewState::NotFound);

    let state = cohorts::cohort_detail(&api, "NOSUCH-Y9").await;
    assert!(matches!(state, ViewState::NotFound));
}

#[tokio::test]
async fn degree_detail_joins_its_cohorts() {
    let api = seeded();
    match degrees::degree_detail(&api, "COMSCI1").await {
        ViewState::Loaded { data } => {
            assert_eq!(data.degree.full_name, "Computer Science");
            assert_eq!(data.cohorts.len(), 1);
            assert_eq!(data.cohorts[0].id, "COMSCI1-Y1");
        }
        other => panic!("expected loaded, got {other:?}"),
    }
}

#[tokio::test]
async fn module_detail_fans_out_once_per_distinct_student() {
    // Grades referencing S1, S1, S2 must produce exactly two student
    // fetches, in first-seen order.
    let api = seeded()
        .with_grade("S1", "CS101", "COMSCI1-Y1", 40, 50)
        .with_grade("S1", "CS102", "COMSCI1-Y1", 60, 70)
        .with_grade("S2", "CS101", "COMSCI1-Y1", 55, 65);

    match modules::module_detail(&api, "CS101").await {
        ViewState::Loaded { data } => {
            assert_eq!(data.module.delivered_to, vec!["COMSCI1-Y1"]);
            let ids: Vec<_> = data.students.iter().map(|s| s.student_id.as_str()).collect();
            assert_eq!(ids, vec!["S1", "S2"]);
        }
        other => panic!("expected loaded, got {other:?}"),
    }

    let student_calls: Vec<_> = api
        .calls()
        .into_iter()
        .filter(|c| c.starts_with("get_student/"))
        .collect();
    assert_eq!(student_calls, vec!["get_student/S1", "get_student/S2"]);
}

#[tokio::test]
async fn failed_fan_out_item_is_dropped_not_fatal() {
    let api = seeded()
        .with_grade("S1", "CS101", "COMSCI1-Y1", 40, 50)
        .with_grade("S2", "CS101", "COMSCI1-Y1", 55, 65)
        .broken_endpoint("get_student/S2");

    match modules::module_detail(&api, "CS101").await {
        ViewState::Loaded { data } => {
            let ids: Vec<_> = data.students.iter().map(|s| s.student_id.as_str()).collect();
            assert_eq!(ids, vec!["S1"]);
        }
        other => panic!("expected loaded, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_module_is_not_found() {
    let api = seeded();
    assert!(matches!(
        modules::module_detail(&api, "NOPE101").await,
        ViewState::NotFound
    ));
}

#[tokio::test]
async fn student_detail_collects_distinct_registered_modules() {
    let api = seeded()
        .with_grade("S1", "CS101", "COMSCI1-Y1", 40, 50)
        .with_grade("S1", "CS101", "COMSCI1-Y1", 60, 70)
        .with_grade("S1", "CS200", "COMSCI1-Y1", 30, 45);

    match students::student_detail(&api, "S1").await {
        ViewState::Loaded { data } => {
            assert_eq!(data.student.cohort, "COMSCI1-Y1");
            assert_eq!(data.registered_modules, vec!["CS101", "CS200"]);
            assert_eq!(data.grades.len(), 3);
            assert_eq!(data.grades[0].module, "CS101");
        }
        other => panic!("expected loaded, got {other:?}"),
    }
}

#[tokio::test]
async fn student_detail_errors_when_grades_fetch_fails() {
    let api = seeded().broken_endpoint("list_grades");
    assert!(matches!(
        students::student_detail(&api, "S1").await,
        ViewState::Error { .. }
    ));
}

#[tokio::test]
async fn rejected_create_surfaces_the_server_detail() {
    let api = seeded().rejecting_endpoint(
        "create_cohort",
        400,
        json!({ "year": ["This field is required."] }),
    );
    let form = cohorts::CohortForm {
        id: "COMSCI1-Y2".to_string(),
        year: 2,
        degree: "COMSCI1".to_string(),
    };
    let err = cohorts::create_cohort(&api, &form).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().contains("This field is required."));
    // The caller's form state is untouched and stays editable.
    assert_eq!(form.id, "COMSCI1-Y2");
    assert_eq!(form.degree, "COMSCI1");
}

#[tokio::test]
async fn create_cohort_posts_a_degree_hyperlink_and_redirects() {
    let api = seeded();
    let form = cohorts::CohortForm {
        id: "COMSCI1-Y2".to_string(),
        year: 2,
        degree: "COMSCI1".to_string(),
    };
    let redirect = cohorts::create_cohort(&api, &form).await.unwrap();
    assert_eq!(redirect.to, "/degree/COMSCI1");

    let created = api.list_cohorts(Some("COMSCI1")).await.unwrap();
    assert!(created.iter().any(|c| c.id == "COMSCI1-Y2"
        && c.degree == "http://mock.test/api/degree/COMSCI1/"));
}

#[tokio::test]
async fn create_module_expands_comma_separated_cohorts() {
    let api = seeded().with_cohort("COMSCI1-Y2", 2, "COMSCI1");
    let form = modules::ModuleForm {
        code: "CS150".to_string(),
        full_name: "Data Structures".to_string(),
        ca_split: 40,
        delivered_to: "COMSCI1-Y1, COMSCI1-Y2, ,".to_string(),
    };
    let redirect = modules::create_module(&api, &form).await.unwrap();
    assert_eq!(redirect.to, "/modules");

    let module = api.get_module("CS150").await.unwrap();
    assert_eq!(
        module.delivered_to,
        vec![
            "http://mock.test/api/cohort/COMSCI1-Y1/",
            "http://mock.test/api/cohort/COMSCI1-Y2/"
        ]
    );
}

#[tokio::test]
async fn create_student_requires_a_cohort_without_touching_the_api() {
    let api = seeded();
    let form = students::StudentForm {
        student_id: "S3".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: None,
        cohort: "".to_string(),
    };
    let err = students::create_student(&api, &form).await.unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));
    assert!(!api.calls().contains(&"create_student".to_string()));
}

#[tokio::test]
async fn create_student_redirects_to_the_new_record() {
    let api = seeded();
    let form = students::StudentForm {
        student_id: " S3 ".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        email: Some("grace@uni.test".to_string()),
        cohort: "COMSCI1-Y1".to_string(),
    };
    let redirect = students::create_student(&api, &form).await.unwrap();
    assert_eq!(redirect.to, "/student/S3");
}

#[tokio::test]
async fn assign_module_creates_a_zero_mark_grade_for_the_students_cohort() {
    let api = seeded();
    let redirect = students::assign_module(&api, "S1", "CS101").await.unwrap();
    assert_eq!(redirect.to, "/student/S1");

    let grades = api.list_grades(Some("S1"), Some("CS101")).await.unwrap();
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].ca_mark, 0);
    assert_eq!(grades[0].exam_mark, 0);
    assert_eq!(grades[0].cohort, "http://mock.test/api/cohort/COMSCI1-Y1/");
}

#[tokio::test]
async fn set_grade_validates_mark_bounds() {
    let api = seeded();
    let form = students::GradeForm {
        ca_mark: 101,
        exam_mark: 50,
    };
    let err = students::set_grade(&api, "S1", "CS101", &form).await.unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));

    let form = students::GradeForm {
        ca_mark: 70,
        exam_mark: 60,
    };
    let redirect = students::set_grade(&api, "S1", "CS101", &form).await.unwrap();
    assert_eq!(redirect.to, "/student/S1");
    let grades = api.list_grades(Some("S1"), Some("CS101")).await.unwrap();
    assert_eq!((grades[0].ca_mark, grades[0].exam_mark), (70, 60));
}

#[tokio::test]
async fn assign_module_view_loads_student_and_options_together() {
    let api = seeded();
    match students::assign_module_view(&api, "S1").await {
        ViewState::Loaded { data } => {
            assert_eq!(data.student.student_id, "S1");
            assert_eq!(data.modules.len(), 1);
        }
        other => panic!("expected loaded, got {other:?}"),
    }
    assert!(matches!(
        students::assign_module_view(&api, "S9").await,
        ViewState::NotFound
    ));
}

#[tokio::test]
async fn list_views_resolve_references() {
    let api = seeded();
    match cohorts::all_cohorts(&api).await {
        ViewState::Loaded { data } => assert_eq!(data[0].degree, "COMSCI1"),
        other => panic!("expected loaded, got {other:?}"),
    }
    match modules::all_modules(&api).await {
        ViewState::Loaded { data } => assert_eq!(data[0].delivered_to, vec!["COMSCI1-Y1"]),
        other => panic!("expected loaded, got {other:?}"),
    }
    match modules::modules_delivered(&api, "COMSCI1-Y1").await {
        ViewState::Loaded { data } => assert_eq!(data.modules.len(), 1),
        other => panic!("expected loaded, got {other:?}"),
    }
}
