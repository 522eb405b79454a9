//! Paper generation tests
//!
//! The assembler is deterministic, so these tests pin exact question
//! sequences and outcome weightages, not just totals.

use academics_service::config::Config;
use academics_service::contract::*;
use academics_service::domain::credentials::PlainTextCredentials;
use academics_service::domain::{NoOpEventPublisher, Service};
use std::sync::Arc;

mod common;
use common::TestCampus;

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

fn section(label: &str, mark: i32, count: i32) -> SectionSpec {
    SectionSpec {
        label: label.to_string(),
        question_type: "Descriptive".to_string(),
        mark_per_question: mark,
        number_of_questions: count,
    }
}

/// Question ids seeded into the CS101 bank, by outcome and denomination
struct QuestionBank {
    co1_five: Vec<i32>,
    co2_five: Vec<i32>,
    co1_ten: Vec<i32>,
    co2_ten: Vec<i32>,
}

/// Lay down CO1/CO2 with one topic each and the requested number of
/// questions per outcome and denomination, as the department head
async fn seed_bank(
    service: &Service,
    campus: &TestCampus,
    five: (usize, usize),
    ten: (usize, usize),
) -> QuestionBank {
    let rao = campus.faculty_session(campus.prof_rao);

    let co1 = service
        .add_course_outcome(rao, campus.cs101, "CO1", "Analyse data structures")
        .await
        .expect("add CO1");
    let co2 = service
        .add_course_outcome(rao, campus.cs101, "CO2", "Apply algorithms")
        .await
        .expect("add CO2");

    let mut topics = Vec::new();
    for (co_id, title) in [(co1.id, "Linked Lists"), (co2.id, "Sorting")] {
        let topic = service
            .add_topic(
                rao,
                NewTopic {
                    course_id: campus.cs101,
                    co_id,
                    code: None,
                    title: title.to_string(),
                    parent_topic_id: None,
                },
            )
            .await
            .expect("add topic");
        topics.push(topic.id);
    }

    let mut bank = QuestionBank {
        co1_five: Vec::new(),
        co2_five: Vec::new(),
        co1_ten: Vec::new(),
        co2_ten: Vec::new(),
    };
    let batches = [
        (topics[0], 5, five.0, &mut bank.co1_five),
        (topics[1], 5, five.1, &mut bank.co2_five),
        (topics[0], 10, ten.0, &mut bank.co1_ten),
        (topics[1], 10, ten.1, &mut bank.co2_ten),
    ];
    for (topic_id, mark, count, ids) in batches {
        for n in 0..count {
            let question = service
                .add_question(
                    rao,
                    NewQuestion {
                        course_id: campus.cs101,
                        topic_id,
                        text: format!("Question {} for {} marks", n + 1, mark),
                        mark_value: mark,
                        bloom_level: "Apply".to_string(),
                        difficulty: Some(2),
                    },
                )
                .await
                .expect("add question");
            ids.push(question.id);
        }
    }
    bank
}

#[tokio::test]
async fn test_generated_paper_matches_template() {
    let (service, _store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let iyer = campus.faculty_session(campus.prof_iyer);

    print_test_header(
        "test_generated_paper_matches_template",
        &[
            "Verify that the paper mirrors the template section by section:",
            "counts, denominations, labels and continuous numbering.",
        ],
    );
    campus.print_structure();

    seed_bank(&service, &campus, (3, 3), (3, 3)).await;
    service
        .define_template(
            iyer,
            campus.cs101,
            180,
            70,
            vec![section("Part A", 5, 4), section("Part B", 10, 5)],
        )
        .await
        .expect("define template");

    let paper = service
        .generate_paper(iyer, campus.cs101)
        .await
        .expect("generate paper");

    assert_eq!(paper.course_id, campus.cs101);
    assert_eq!(paper.total_marks, 70);
    assert_eq!(paper.questions.len(), 9);

    let orders: Vec<i32> = paper.questions.iter().map(|q| q.order).collect();
    assert_eq!(orders, (1..=9).collect::<Vec<i32>>());

    for placement in &paper.questions[..4] {
        assert_eq!(placement.mark_value, 5);
        assert_eq!(placement.section_label.as_deref(), Some("Part A"));
    }
    for placement in &paper.questions[4..] {
        assert_eq!(placement.mark_value, 10);
        assert_eq!(placement.section_label.as_deref(), Some("Part B"));
    }

    // No question appears twice
    let mut ids: Vec<i32> = paper.questions.iter().map(|q| q.question_id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 9);

    // Part A alternates outcomes, Part B favours neither by more than one
    // denomination
    println!("   CO weightages: {:?}", paper.co_weightages);
    assert_eq!(paper.co_weightages["CO1"], 40);
    assert_eq!(paper.co_weightages["CO2"], 30);
}

#[tokio::test]
async fn test_generation_is_deterministic() {
    let (service, store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let iyer = campus.faculty_session(campus.prof_iyer);

    print_test_header(
        "test_generation_is_deterministic",
        &["Verify that the same bank and template always produce the same paper."],
    );

    seed_bank(&service, &campus, (4, 4), (2, 2)).await;
    service
        .define_template(
            iyer,
            campus.cs101,
            120,
            50,
            vec![section("Part A", 5, 6), section("Part B", 10, 2)],
        )
        .await
        .expect("define template");

    let first = service
        .generate_paper(iyer, campus.cs101)
        .await
        .expect("first paper");
    let second = service
        .generate_paper(iyer, campus.cs101)
        .await
        .expect("second paper");

    let first_ids: Vec<i32> = first.questions.iter().map(|q| q.question_id).collect();
    let second_ids: Vec<i32> = second.questions.iter().map(|q| q.question_id).collect();
    assert_eq!(first_ids, second_ids);
    assert_eq!(first.co_weightages, second.co_weightages);

    // Both runs were persisted as separate papers
    assert_eq!(store.paper_count(), 2);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_outcome_balance_follows_allocation() {
    let (service, _store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let iyer = campus.faculty_session(campus.prof_iyer);

    print_test_header(
        "test_outcome_balance_follows_allocation",
        &[
            "Verify the selection rule on a skewed bank: every pick goes to the",
            "outcome with the fewest marks so far, until its stock runs dry.",
        ],
    );

    // CO1 has five 5-mark questions, CO2 only one
    let bank = seed_bank(&service, &campus, (5, 1), (0, 0)).await;
    service
        .define_template(iyer, campus.cs101, 90, 30, vec![section("Part A", 5, 6)])
        .await
        .expect("define template");

    let paper = service
        .generate_paper(iyer, campus.cs101)
        .await
        .expect("generate paper");

    let codes: Vec<&str> = paper
        .questions
        .iter()
        .map(|q| q.co_satisfied.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(codes, vec!["CO1", "CO2", "CO1", "CO1", "CO1", "CO1"]);

    println!("   CO weightages: {:?}", paper.co_weightages);
    assert_eq!(paper.co_weightages["CO1"], 25);
    assert_eq!(paper.co_weightages["CO2"], 5);

    // The single CO2 question was the one in the bank
    assert_eq!(paper.questions[1].question_id, bank.co2_five[0]);
}

#[tokio::test]
async fn test_pool_exhaustion_aborts_generation() {
    let (service, store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let iyer = campus.faculty_session(campus.prof_iyer);

    print_test_header(
        "test_pool_exhaustion_aborts_generation",
        &[
            "Verify that a section the bank cannot fill aborts the whole",
            "generation with the shortfall reported and nothing persisted.",
        ],
    );

    seed_bank(&service, &campus, (2, 1), (0, 0)).await;
    service
        .define_template(iyer, campus.cs101, 60, 20, vec![section("Part A", 5, 4)])
        .await
        .expect("define template");

    let result = service.generate_paper(iyer, campus.cs101).await.unwrap_err();
    assert_eq!(
        result,
        AcademicsError::QuestionPoolExhausted {
            section_label: "Part A".to_string(),
            missing: 1,
        }
    );
    assert_eq!(store.paper_count(), 0);

    let papers = service
        .list_generated_papers(iyer, campus.cs101)
        .await
        .expect("list papers");
    assert!(papers.is_empty());
}

#[tokio::test]
async fn test_retired_question_stays_in_old_papers() {
    let (service, _store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let rao = campus.faculty_session(campus.prof_rao);
    let iyer = campus.faculty_session(campus.prof_iyer);

    print_test_header(
        "test_retired_question_stays_in_old_papers",
        &[
            "Verify that retiring a question removes it from future papers while",
            "papers that already used it keep their reference.",
        ],
    );

    let bank = seed_bank(&service, &campus, (2, 2), (0, 0)).await;
    service
        .define_template(iyer, campus.cs101, 60, 10, vec![section("Part A", 5, 2)])
        .await
        .expect("define template");

    println!("\n📝 Stage 1: First paper uses the first question of each outcome");
    let first = service
        .generate_paper(iyer, campus.cs101)
        .await
        .expect("first paper");
    let first_ids: Vec<i32> = first.questions.iter().map(|q| q.question_id).collect();
    assert_eq!(first_ids, vec![bank.co1_five[0], bank.co2_five[0]]);

    println!("\n📝 Stage 2: The head retires that CO1 question");
    service
        .retire_question(rao, bank.co1_five[0])
        .await
        .expect("retire question");

    println!("\n📝 Stage 3: The next paper falls back to the second CO1 question");
    let second = service
        .generate_paper(iyer, campus.cs101)
        .await
        .expect("second paper");
    let second_ids: Vec<i32> = second.questions.iter().map(|q| q.question_id).collect();
    assert_eq!(second_ids, vec![bank.co1_five[1], bank.co2_five[0]]);

    println!("\n📝 Stage 4: The old paper still references the retired question");
    let papers = service
        .list_generated_papers(iyer, campus.cs101)
        .await
        .expect("list papers");
    assert_eq!(papers.len(), 2);
    // Newest first
    assert_eq!(papers[0].id, second.id);
    assert_eq!(papers[1].id, first.id);
    let old_ids: Vec<i32> = papers[1].questions.iter().map(|q| q.question_id).collect();
    assert!(old_ids.contains(&bank.co1_five[0]));
}

#[tokio::test]
async fn test_weightage_snapshot_survives_outcome_changes() {
    let (service, _store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let rao = campus.faculty_session(campus.prof_rao);
    let iyer = campus.faculty_session(campus.prof_iyer);

    print_test_header(
        "test_weightage_snapshot_survives_outcome_changes",
        &[
            "Verify that a stored paper keeps the outcome weightages it was",
            "generated with even after new outcomes join the course.",
        ],
    );

    let bank = seed_bank(&service, &campus, (2, 2), (0, 0)).await;
    service
        .define_template(iyer, campus.cs101, 45, 15, vec![section("Part A", 5, 3)])
        .await
        .expect("define template");

    println!("\n📝 Stage 1: First paper balances across the two existing outcomes");
    let first = service
        .generate_paper(iyer, campus.cs101)
        .await
        .expect("first paper");
    let first_ids: Vec<i32> = first.questions.iter().map(|q| q.question_id).collect();
    assert_eq!(
        first_ids,
        vec![bank.co1_five[0], bank.co2_five[0], bank.co1_five[1]]
    );
    assert_eq!(first.co_weightages["CO1"], 10);
    assert_eq!(first.co_weightages["CO2"], 5);

    println!("\n📝 Stage 2: The head adds a third outcome with its own question");
    let co3 = service
        .add_course_outcome(rao, campus.cs101, "CO3", "Design complexity proofs")
        .await
        .expect("add CO3");
    let graph_topic = service
        .add_topic(
            rao,
            NewTopic {
                course_id: campus.cs101,
                co_id: co3.id,
                code: None,
                title: "Graph Traversal".to_string(),
                parent_topic_id: None,
            },
        )
        .await
        .expect("add topic");
    service
        .add_question(
            rao,
            NewQuestion {
                course_id: campus.cs101,
                topic_id: graph_topic.id,
                text: "Question 1 for 5 marks".to_string(),
                mark_value: 5,
                bloom_level: "Apply".to_string(),
                difficulty: Some(2),
            },
        )
        .await
        .expect("add question");

    println!("\n📝 Stage 3: The next paper spreads across all three outcomes");
    let second = service
        .generate_paper(iyer, campus.cs101)
        .await
        .expect("second paper");
    assert_eq!(second.co_weightages["CO1"], 5);
    assert_eq!(second.co_weightages["CO2"], 5);
    assert_eq!(second.co_weightages["CO3"], 5);

    println!("\n📝 Stage 4: The stored first paper still reads as generated");
    let papers = service
        .list_generated_papers(iyer, campus.cs101)
        .await
        .expect("list papers");
    assert_eq!(papers.len(), 2);
    assert_eq!(papers[1].id, first.id);
    assert_eq!(papers[1].co_weightages.len(), 2);
    assert_eq!(papers[1].co_weightages["CO1"], 10);
    assert_eq!(papers[1].co_weightages["CO2"], 5);
    assert!(!papers[1].co_weightages.contains_key("CO3"));
}

#[tokio::test]
async fn test_super_admin_generation_is_unattributed() {
    let (service, _store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");
    let iyer = campus.faculty_session(campus.prof_iyer);

    print_test_header(
        "test_super_admin_generation_is_unattributed",
        &[
            "Verify that papers generated by faculty carry their id while super",
            "admin runs carry no author.",
        ],
    );

    seed_bank(&service, &campus, (2, 2), (0, 0)).await;
    service
        .define_template(iyer, campus.cs101, 60, 10, vec![section("Part A", 5, 2)])
        .await
        .expect("define template");

    let by_faculty = service
        .generate_paper(iyer, campus.cs101)
        .await
        .expect("faculty paper");
    assert_eq!(by_faculty.generated_by, Some(campus.prof_iyer));

    let by_admin = service
        .generate_paper(campus.admin_session(), campus.cs101)
        .await
        .expect("admin paper");
    assert_eq!(by_admin.generated_by, None);

    let papers = service
        .list_generated_papers(campus.admin_session(), campus.cs101)
        .await
        .expect("list papers");
    let authors: Vec<Option<i32>> = papers.iter().map(|p| p.generated_by).collect();
    assert_eq!(authors, vec![None, Some(campus.prof_iyer)]);
}

#[tokio::test]
async fn test_generation_requires_template() {
    let (service, _store) = create_test_service_with_store();
    let campus = TestCampus::seed(&service).await.expect("seed campus");

    print_test_header(
        "test_generation_requires_template",
        &["Verify the failure modes: missing template, missing course."],
    );

    let no_template = service
        .generate_paper(campus.admin_session(), campus.cs101)
        .await
        .unwrap_err();
    assert_eq!(
        no_template,
        AcademicsError::NotFound {
            resource: "template".to_string(),
            id: campus.cs101.to_string(),
        }
    );

    let no_course = service
        .generate_paper(campus.admin_session(), 9_999)
        .await
        .unwrap_err();
    assert_eq!(
        no_course,
        AcademicsError::NotFound {
            resource: "course".to_string(),
            id: "9999".to_string(),
        }
    );
}
