use chrono::Duration;
use quiz_core::model::{Performance, QuestionBank, QuestionDraft, ScoreBands};
use quiz_core::time::fixed_clock;
use services::{Advance, ErrorKind, QuizSession, StateError};

fn bank(corrects: &[usize]) -> QuestionBank {
    let drafts = corrects
        .iter()
        .enumerate()
        .map(|(i, &correct_index)| QuestionDraft {
            title: format!("Scenario {}", i + 1),
            prompt: format!("Prompt {}", i + 1),
            options: vec![
                "Section 378".into(),
                "Section 408".into(),
                "Section 405".into(),
                "Section 420".into(),
            ],
            correct_index,
            explanation: format!("Explanation {}", i + 1),
            hint: format!("Hint {}", i + 1),
            reference: format!("Case {}", i + 1),
        })
        .collect();
    QuestionBank::from_drafts(drafts).unwrap()
}

fn answer(session: &mut QuizSession, option: usize) -> bool {
    session.select_option(option).unwrap();
    session.submit().unwrap().is_correct
}

#[test]
fn perfect_three_question_run_scores_full_marks() {
    let mut session = QuizSession::with_clock(fixed_clock());
    session.start_bank(bank(&[1, 2, 0]));

    for (i, correct) in [1, 2, 0].into_iter().enumerate() {
        assert_eq!(session.progress().unwrap().as_tuple(), (i + 1, 3));
        assert!(answer(&mut session, correct));
        let advance = session.go_next().unwrap();
        if i < 2 {
            assert_eq!(advance, Advance::Moved { index: i + 1 });
        } else {
            assert!(advance.is_finished());
        }
    }

    assert!(session.is_finished());
    let summary = session.final_summary().unwrap();
    assert_eq!(summary.as_tuple(), (3, 3, 100));
    assert_eq!(
        summary.performance(&ScoreBands::default()),
        Performance::Excellent
    );
}

#[test]
fn revisiting_answered_question_restores_it_without_rescoring() {
    let corrects = [1, 2, 0, 3, 1, 2, 0, 3, 1, 2];
    let mut session = QuizSession::with_clock(fixed_clock());
    session.start_bank(bank(&corrects));

    assert!(answer(&mut session, 1));
    session.go_next().unwrap();
    assert!(!answer(&mut session, 0));
    session.go_next().unwrap();
    assert!(answer(&mut session, 0));
    assert_eq!(session.score(), 2);

    assert_eq!(session.go_previous().unwrap(), 1);
    let view = session.current_question().unwrap();
    assert!(view.answered);
    assert_eq!(view.selected_option, Some(0));
    assert_eq!(view.is_correct, Some(false));
    assert!(!view.can_submit);
    assert_eq!(session.score(), 2);

    let err = session.select_option(2).unwrap_err();
    assert_eq!(err.state(), Some(&StateError::AlreadyAnswered));
    let err = session.submit().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    // Forward again lands on the already answered third question.
    session.go_next().unwrap();
    let view = session.current_question().unwrap();
    assert_eq!(view.index, 2);
    assert!(view.answered);
    assert_eq!(view.selected_option, Some(0));
    assert_eq!(view.is_correct, Some(true));
    assert_eq!(session.score(), 2);

    // Fourth question was never reached, so it starts unanswered.
    session.go_next().unwrap();
    let view = session.current_question().unwrap();
    assert_eq!(view.index, 3);
    assert!(!view.answered);
    assert_eq!(view.selected_option, None);
    assert_eq!(
        session.go_next().unwrap_err().state(),
        Some(&StateError::Unanswered)
    );
}

#[test]
fn score_never_decreases_or_outruns_answers() {
    let corrects = [0, 1, 2, 3, 0, 1];
    let picks = [0, 0, 2, 1, 0, 1];
    let mut session = QuizSession::with_clock(fixed_clock());
    session.start_bank(bank(&corrects));

    let mut last_score = 0;
    for (i, pick) in picks.into_iter().enumerate() {
        answer(&mut session, pick);
        assert!(session.score() >= last_score);
        assert!(session.score() as usize <= session.answered_count());
        last_score = session.score();

        if i > 0 {
            session.go_previous().unwrap();
            assert_eq!(session.score(), last_score);
            session.go_next().unwrap();
        }
        session.go_next().unwrap();
    }

    let summary = session.final_summary().unwrap();
    assert_eq!(summary.as_tuple(), (4, 6, 67));
    assert_eq!(summary.performance(&ScoreBands::default()), Performance::Good);
}

#[test]
fn score_is_bounded_by_answers_not_position_after_going_back() {
    let mut session = QuizSession::with_clock(fixed_clock());
    session.start_bank(bank(&[1, 2, 0]));

    assert!(answer(&mut session, 1));
    session.go_next().unwrap();
    assert!(answer(&mut session, 2));
    session.go_previous().unwrap();

    let view = session.current_question().unwrap();
    assert_eq!(view.index, 0);
    assert_eq!(session.score(), 2);
    assert_eq!(session.answered_count(), 2);
    assert!(session.score() as usize <= session.answered_count());
}

#[test]
fn finished_session_reviews_every_answer() {
    let mut session = QuizSession::with_clock(fixed_clock());
    session.start_bank(bank(&[1, 2, 0]));
    assert!(session.review().is_empty());

    assert!(answer(&mut session, 1));
    session.go_next().unwrap();
    assert!(!answer(&mut session, 3));
    session.go_next().unwrap();
    assert!(answer(&mut session, 0));
    assert!(session.review().is_empty());
    session.go_next().unwrap();

    let review = session.review();
    assert_eq!(review.len(), 3);

    assert_eq!(review[0].index, 0);
    assert!(review[0].is_correct);
    assert_eq!(review[0].selected_option.as_deref(), Some("Section 408"));

    assert_eq!(review[1].title, "Scenario 2");
    assert_eq!(review[1].selected, Some(3));
    assert_eq!(review[1].selected_option.as_deref(), Some("Section 420"));
    assert_eq!(review[1].correct_index, 2);
    assert_eq!(review[1].correct_option, "Section 405");
    assert!(!review[1].is_correct);
    assert_eq!(review[1].explanation, "Explanation 2");

    assert!(review[2].is_correct);
    assert_eq!(
        review.iter().filter(|item| item.is_correct).count() as u32,
        session.final_summary().unwrap().score()
    );
}

#[test]
fn elapsed_is_non_decreasing_then_frozen() {
    let mut session = QuizSession::with_clock(fixed_clock());
    session.start_bank(bank(&[0, 1]));

    let first = session.elapsed();
    session.clock_mut().advance(Duration::seconds(61));
    let second = session.elapsed();
    assert!(second >= first);
    assert_eq!(second, Duration::seconds(61));

    answer(&mut session, 0);
    session.go_next().unwrap();
    answer(&mut session, 1);
    session.clock_mut().advance(Duration::seconds(4));
    session.go_next().unwrap();

    let frozen = session.elapsed();
    assert_eq!(frozen, Duration::seconds(65));
    session.clock_mut().advance(Duration::hours(1));
    assert_eq!(session.elapsed(), frozen);
    assert_eq!(session.final_summary().unwrap().elapsed(), frozen);
}

#[test]
fn restart_then_start_gives_a_clean_attempt() {
    let mut session = QuizSession::with_clock(fixed_clock());
    session.start_bank(bank(&[0, 1]));
    answer(&mut session, 0);
    session.go_next().unwrap();
    answer(&mut session, 1);
    session.go_next().unwrap();
    assert_eq!(session.final_summary().unwrap().score(), 2);

    session.restart();
    assert!(!session.is_started());
    assert!(session.final_summary().is_none());

    session.start_bank(bank(&[0, 1]));
    assert_eq!(session.score(), 0);
    assert_eq!(session.answered_count(), 0);
    let view = session.current_question().unwrap();
    assert_eq!(view.index, 0);
    assert!(!view.answered);
}

#[test]
fn legacy_json_bank_drives_a_session() {
    let raw = r#"[
        {
            "title": "Theft vs. Criminal Breach of Trust",
            "question": "What should the cashier be charged with?",
            "options": ["Section 378", "Section 408", "Section 405", "Section 420"],
            "correct": 1,
            "explanation": "Entrusted property misused by a servant.",
            "hint": "Key Sections: 405, 408, 378",
            "caselaw": "Jaswant Singh vs. State of Punjab"
        }
    ]"#;
    let mut session = QuizSession::with_clock(fixed_clock());
    session.start_bank(QuestionBank::from_json_str(raw).unwrap());

    let view = session.current_question().unwrap();
    assert_eq!(view.question.hint(), "Key Sections: 405, 408, 378");
    assert!(view.is_last);

    session.select_option(1).unwrap();
    let outcome = session.submit().unwrap();
    assert!(outcome.is_correct);
    assert_eq!(outcome.correct_option, "Section 408");
    assert_eq!(outcome.reference, "Jaswant Singh vs. State of Punjab");
}
