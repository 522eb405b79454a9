//! Role boundary tests
//!
//! Denials must be clean: the caller gets AccessDenied and the store keeps
//! exactly the rows it had. Several tests check the counts to prove it.

use academics_service::config::Config;
use academics_service::contract::*;
use academics_service::domain::credentials::PlainTextCredentials;
use academics_service::domain::{NoOpEventPublisher, Service};
use std::sync::Arc;

mod common;
use common::{TestCampus, ADMIN_PASSWORD, FACULTY_PASSWORD};

use service_tests::mocks::MockCampusStore;

fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

fn create_test_service() -> Service {
    let store = MockCampusStore::new();
    Service::new(
        store.stores(),
        Arc::new(PlainTextCredentials),
        Arc::new(NoOpEventPublisher),
        Config::default(),
    )
}

fn create_test_service_with_store() -> (Service, MockCampusStore) {
    let store = MockCampusStore::new();
    let service = Service::new(
        store.stores(),
        Arc::new(PlainTextCredentials),
        Arc::new(NoOpEventPublisher),
        Config::default(),
    );
    (service, store)
}

fn basic_sections() -> Vec<SectionSpec> {
    vec![SectionSpec {
        label: "Part A".to_string(),
        question_type: "Descriptive".to_string(),
        mark_per_question: 10,
        number_of_questions: 6,
    }]
}

#[tokio::test]
async fn test_unassigned_faculty_cannot_define_template() {
    let (service, store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");

    print_test_header(
        "test_unassigned_faculty_cannot_define_template",
        &[
            "Verify that template definition needs a teaching assignment for the",
            "course, not just membership of the owning department.",
        ],
    );
    campus.print_structure();

    println!("\n📝 Prof. Menon has nothing to do with CS101");
    let foreign = service
        .define_template(
            campus.faculty_session(campus.prof_menon),
            campus.cs101,
            180,
            60,
            basic_sections(),
        )
        .await
        .unwrap_err();
    assert_eq!(foreign, AcademicsError::AccessDenied);

    println!("\n📝 Prof. Iyer is in the right department but does not teach CS201");
    let same_department = service
        .define_template(
            campus.faculty_session(campus.prof_iyer),
            campus.cs201,
            180,
            60,
            basic_sections(),
        )
        .await
        .unwrap_err();
    assert_eq!(same_department, AcademicsError::AccessDenied);

    assert_eq!(store.template_count(), 0);
}

#[tokio::test]
async fn test_faculty_question_bank_is_read_only() {
    let service = create_test_service();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let rao = campus.faculty_session(campus.prof_rao);
    let iyer = campus.faculty_session(campus.prof_iyer);

    print_test_header(
        "test_faculty_question_bank_is_read_only",
        &[
            "Verify that the assigned teacher can browse the bank of their course",
            "but cannot add to it or retire from it.",
        ],
    );

    let co = service
        .add_course_outcome(rao, campus.cs101, "CO1", "Analyse data structures")
        .await
        .expect("head adds outcome");
    let topic = service
        .add_topic(
            rao,
            NewTopic {
                course_id: campus.cs101,
                co_id: co.id,
                code: None,
                title: "Linked Lists".to_string(),
                parent_topic_id: None,
            },
        )
        .await
        .expect("head adds topic");
    let question = service
        .add_question(
            rao,
            NewQuestion {
                course_id: campus.cs101,
                topic_id: topic.id,
                text: "Reverse a singly linked list".to_string(),
                mark_value: 5,
                bloom_level: "Apply".to_string(),
                difficulty: Some(2),
            },
        )
        .await
        .expect("head adds question");

    let visible = service
        .list_questions(iyer, campus.cs101, true)
        .await
        .expect("assigned teacher reads the bank");
    assert_eq!(visible.len(), 1);

    let add = service
        .add_question(
            iyer,
            NewQuestion {
                course_id: campus.cs101,
                topic_id: topic.id,
                text: "Detect a cycle in a linked list".to_string(),
                mark_value: 5,
                bloom_level: "Apply".to_string(),
                difficulty: Some(3),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(add, AcademicsError::AccessDenied);

    let retire = service.retire_question(iyer, question.id).await.unwrap_err();
    assert_eq!(retire, AcademicsError::AccessDenied);

    // The question is still there and still active
    let bank = service
        .list_questions(rao, campus.cs101, true)
        .await
        .expect("head reads the bank");
    assert_eq!(bank.len(), 1);
    assert!(bank[0].active);
}

#[tokio::test]
async fn test_faculty_has_no_administrative_surface() {
    let service = create_test_service();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let menon = campus.faculty_session(campus.prof_menon);

    print_test_header(
        "test_faculty_has_no_administrative_surface",
        &["Verify that plain faculty cannot reach any administrative operation."],
    );

    let denied = [
        service
            .create_department(menon, "Aerospace Engineering")
            .await
            .unwrap_err(),
        service.list_departments(menon).await.unwrap_err(),
        service
            .create_faculty(
                menon,
                NewFaculty {
                    name: "Prof. Nair".to_string(),
                    email: "nair@campus.edu".to_string(),
                    password: FACULTY_PASSWORD.to_string(),
                    department_id: campus.mechanical,
                },
            )
            .await
            .unwrap_err(),
        // Their own department's roster included
        service
            .list_faculty(menon, campus.mechanical)
            .await
            .unwrap_err(),
        service
            .create_programme(menon, "M.Tech Thermal", campus.mechanical)
            .await
            .unwrap_err(),
        service
            .list_programmes(menon, campus.mechanical)
            .await
            .unwrap_err(),
        service
            .assign_course(menon, campus.btech_cse, campus.cs201, 4, campus.prof_iyer)
            .await
            .unwrap_err(),
        service
            .list_offerings(menon, campus.btech_cse)
            .await
            .unwrap_err(),
        service.delete_course(menon, campus.me101).await.unwrap_err(),
        service
            .delete_faculty(menon, campus.prof_menon)
            .await
            .unwrap_err(),
    ];

    for result in denied {
        assert_eq!(result, AcademicsError::AccessDenied);
    }
}

#[tokio::test]
async fn test_hod_is_scoped_to_own_department() {
    let service = create_test_service();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let rao = campus.faculty_session(campus.prof_rao);

    print_test_header(
        "test_hod_is_scoped_to_own_department",
        &["Verify that a head of department has no reach into other departments."],
    );

    let roster = service.list_faculty(rao, campus.mechanical).await.unwrap_err();
    assert_eq!(roster, AcademicsError::AccessDenied);

    let programme = service
        .create_programme(rao, "B.Tech Mechanical", campus.mechanical)
        .await
        .unwrap_err();
    assert_eq!(programme, AcademicsError::AccessDenied);

    let outcome = service
        .add_course_outcome(rao, campus.me101, "CO1", "Apply statics")
        .await
        .unwrap_err();
    assert_eq!(outcome, AcademicsError::AccessDenied);

    // Reading a foreign course's template is denied before its existence
    // is even checked
    let template = service.get_template(rao, campus.me101).await.unwrap_err();
    assert_eq!(template, AcademicsError::AccessDenied);

    let delete = service.delete_course(rao, campus.me101).await.unwrap_err();
    assert_eq!(delete, AcademicsError::AccessDenied);
}

#[tokio::test]
async fn test_hod_cannot_manage_department_catalogue() {
    let service = create_test_service();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let rao = campus.faculty_session(campus.prof_rao);

    print_test_header(
        "test_hod_cannot_manage_department_catalogue",
        &[
            "Verify that the department catalogue stays with the super admin:",
            "heads cannot create, list or delete departments, their own included.",
        ],
    );

    let create = service
        .create_department(rao, "Quantum Engineering")
        .await
        .unwrap_err();
    assert_eq!(create, AcademicsError::AccessDenied);

    let list = service.list_departments(rao).await.unwrap_err();
    assert_eq!(list, AcademicsError::AccessDenied);

    let own = service
        .delete_department(rao, campus.computer_science)
        .await
        .unwrap_err();
    assert_eq!(own, AcademicsError::AccessDenied);

    // The department is still standing
    let actor = service
        .resolve_actor(campus.faculty_session(campus.prof_rao))
        .await
        .expect("rao still resolves");
    assert!(matches!(actor, Actor::HeadOfDepartment { .. }));
}

#[tokio::test]
async fn test_hod_has_full_control_at_home() {
    let service = create_test_service();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let rao = campus.faculty_session(campus.prof_rao);

    print_test_header(
        "test_hod_has_full_control_at_home",
        &[
            "Verify the positive side of the scope: inside their department a",
            "head runs the curriculum and every course surface.",
        ],
    );

    println!("\n📝 CS201 has no teacher yet; the head still owns its template");
    let template = service
        .define_template(rao, campus.cs201, 120, 60, basic_sections())
        .await
        .expect("head defines template for home course");
    assert_eq!(template.course_id, campus.cs201);

    let fetched = service
        .get_template(rao, campus.cs201)
        .await
        .expect("head reads it back");
    assert_eq!(fetched.id, template.id);

    println!("\n📝 The head places CS201 into the B.Tech curriculum");
    service
        .assign_course(rao, campus.btech_cse, campus.cs201, 4, campus.prof_iyer)
        .await
        .expect("head assigns course");

    let offerings = service
        .list_offerings(rao, campus.btech_cse)
        .await
        .expect("head lists offerings");
    assert_eq!(offerings.len(), 2);
}

#[tokio::test]
async fn test_denied_writes_leave_no_trace() {
    let (service, store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let menon = campus.faculty_session(campus.prof_menon);

    print_test_header(
        "test_denied_writes_leave_no_trace",
        &["Verify that a burst of denied writes changes nothing in the store."],
    );

    store.print_state("Before denied writes");
    let faculty = store.faculty_count();
    let offerings = store.offering_count();
    let templates = store.template_count();
    let papers = store.paper_count();

    let _ = service
        .define_template(menon, campus.cs101, 180, 60, basic_sections())
        .await;
    let _ = service
        .add_question(
            menon,
            NewQuestion {
                course_id: campus.cs101,
                topic_id: 1,
                text: "Smuggled question".to_string(),
                mark_value: 5,
                bloom_level: "Apply".to_string(),
                difficulty: None,
            },
        )
        .await;
    let _ = service
        .assign_course(menon, campus.btech_cse, campus.cs201, 4, campus.prof_iyer)
        .await;
    let _ = service
        .create_faculty(
            menon,
            NewFaculty {
                name: "Prof. Ghost".to_string(),
                email: "ghost@campus.edu".to_string(),
                password: FACULTY_PASSWORD.to_string(),
                department_id: campus.mechanical,
            },
        )
        .await;
    let _ = service.generate_paper(menon, campus.cs101).await;

    store.print_state("After denied writes");
    assert_eq!(store.faculty_count(), faculty);
    assert_eq!(store.offering_count(), offerings);
    assert_eq!(store.template_count(), templates);
    assert_eq!(store.paper_count(), papers);

    let bank = service
        .list_questions(campus.admin_session(), campus.cs101, false)
        .await
        .expect("admin reads the bank");
    assert!(bank.is_empty());
}

#[tokio::test]
async fn test_session_role_tag_checked_against_its_table() {
    let service = create_test_service();
    let campus = TestCampus::seed(&service).await.expect("seed campus");

    print_test_header(
        "test_session_role_tag_checked_against_its_table",
        &[
            "Verify that authentication hands out the right role tag and that a",
            "tampered tag resolves against the wrong table and dies.",
        ],
    );

    let admin = service
        .authenticate_super_admin("registrar@campus.edu", ADMIN_PASSWORD)
        .await
        .expect("admin authenticates");
    assert_eq!(admin.role, RoleTag::SuperAdmin);

    let iyer = service
        .authenticate_faculty("iyer@campus.edu", FACULTY_PASSWORD)
        .await
        .expect("faculty authenticates");
    assert_eq!(iyer.role, RoleTag::Faculty);
    assert_eq!(iyer.user_id, campus.prof_iyer);

    // Same row id, wrong table: the forged principal resolves to nothing
    let forged = service
        .resolve_actor(Some(Principal::super_admin(iyer.user_id)))
        .await
        .unwrap_err();
    assert_eq!(
        forged,
        AcademicsError::UnknownPrincipal {
            user_id: iyer.user_id
        }
    );
}
