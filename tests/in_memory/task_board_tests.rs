//! In-memory integration tests for the task board workflow.

use crate::in_memory::helpers::{CLEANING, MOVING, SECOND_CUSTOMER, TestService, service};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, TaskId, TaskListing, TaskRevision, TaskStatus},
    ports::{TaskRepository, WriteOutcome},
    services::TaskBoardError,
};

/// Asserts listings are ordered by strictly descending identifier.
///
/// # Errors
///
/// Returns an error naming the first out-of-order pair.
fn assert_newest_first(listings: &[TaskListing]) -> Result<(), eyre::Report> {
    for pair in listings.windows(2) {
        let [newer, older] = pair else {
            continue;
        };
        eyre::ensure!(
            newer.task().id() > older.task().id(),
            "task {} listed before task {}",
            newer.task().id(),
            older.task().id()
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn posted_tasks_are_listed_newest_first(
    service: (TestService, InMemoryTaskRepository),
) -> Result<(), eyre::Report> {
    let (board, _) = service;
    for index in 0..5 {
        board
            .post(NewTask::new(
                format!("Task {index}"),
                "Details",
                "Bordeaux",
                if index % 2 == 0 { MOVING } else { CLEANING },
            ))
            .await?;
    }

    let listings = board.listings().await?;
    eyre::ensure!(listings.len() == 5, "expected 5 listings, found {}", listings.len());
    assert_newest_first(&listings)?;

    let newest = listings
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one listing"))?;
    assert_eq!(newest.task().title(), "Task 4");
    assert_eq!(newest.category_name(), "Moving");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_carry_their_owner_name(
    service: (TestService, InMemoryTaskRepository),
) -> Result<(), eyre::Report> {
    let (board, _) = service;
    let placeholder_owned = board
        .post(NewTask::new("Sweep", "Garage", "Lille", CLEANING))
        .await?;
    let second_owned = board
        .post(NewTask::new("Mop", "Kitchen", "Lille", CLEANING).for_customer(SECOND_CUSTOMER))
        .await?;

    let first = board
        .task(placeholder_owned)
        .await?
        .ok_or_else(|| eyre::eyre!("task {placeholder_owned} missing"))?;
    let second = board
        .task(second_owned)
        .await?
        .ok_or_else(|| eyre::eyre!("task {second_owned} missing"))?;

    assert_eq!(first.customer().user.lastname, "Lovelace");
    assert_eq!(second.customer().id, SECOND_CUSTOMER);
    assert_eq!(second.customer().user.lastname, "Turing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn revise_then_withdraw_round_trip(
    service: (TestService, InMemoryTaskRepository),
) -> Result<(), eyre::Report> {
    let (board, repository) = service;
    let id = board
        .post(NewTask::new("Move boxes", "Ten boxes", "Rennes", MOVING).with_image("/img/boxes.jpg"))
        .await?;

    board
        .revise(TaskRevision {
            id,
            title: "Move crates".to_owned(),
            description: "Twelve crates".to_owned(),
            location: "Rennes".to_owned(),
            category_id: CLEANING,
        })
        .await?;

    let revised = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("task {id} missing after revision"))?;
    assert_eq!(revised.title(), "Move crates");
    assert_eq!(revised.category_id(), CLEANING);
    assert_eq!(revised.status(), TaskStatus::Open);
    assert_eq!(revised.image(), Some("/img/boxes.jpg"));

    board.withdraw(id).await?;
    assert!(board.task(id).await?.is_none());
    assert_eq!(repository.delete(id).await?, WriteOutcome::NotFound);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn withdrawing_unknown_task_reports_not_found(
    service: (TestService, InMemoryTaskRepository),
) {
    let (board, _) = service;
    let result = board.withdraw(TaskId::new(12)).await;
    assert!(matches!(result, Err(TaskBoardError::NotFound(id)) if id == TaskId::new(12)));
}
