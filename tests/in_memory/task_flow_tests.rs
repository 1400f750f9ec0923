//! In-memory integration tests for the task lifecycle.

use rstest::rstest;
use taskwarden::config::services::UpdateSettingsRequest;
use taskwarden::task::{
    domain::TaskStatus,
    services::{AddTaskRequest, EditTaskRequest, ListFilter, TaskCommandError},
};

use super::helpers::{Services, guild, member, platform_admin, role, services, user};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_from_creation_to_soft_delete(services: Services) {
    let owner = member(10);
    let stranger = member(11);

    let created = services
        .tasks
        .add(
            AddTaskRequest::new(guild(1), user(10), "Prepare launch checklist")
                .with_description("Cover rollout and rollback steps"),
        )
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::Open);

    // A non-owner without admin standing cannot complete the task.
    let denied = services
        .tasks
        .done(guild(1), created.id(), &stranger)
        .await;
    assert!(matches!(denied, Err(TaskCommandError::Permission(_))));

    let still_open = services
        .tasks
        .detail(guild(1), created.id())
        .await
        .expect("detail lookup should succeed");
    assert_eq!(still_open.status(), TaskStatus::Open);

    let completed = services
        .tasks
        .done(guild(1), created.id(), &owner)
        .await
        .expect("owner completion should succeed");
    assert_eq!(completed.status(), TaskStatus::Done);

    let deleted = services
        .tasks
        .delete(guild(1), created.id(), &owner)
        .await
        .expect("owner delete should succeed");
    assert_eq!(deleted.status(), TaskStatus::Deleted);

    let hidden = services.tasks.detail(guild(1), created.id()).await;
    assert!(matches!(hidden, Err(TaskCommandError::NotFound { .. })));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_admin_role_grants_mutation_rights(services: Services) {
    services
        .config
        .set(
            guild(1),
            &platform_admin(1),
            UpdateSettingsRequest::new().with_entry("admin_role", "77"),
        )
        .await
        .expect("settings update should succeed");

    let created = services
        .tasks
        .add(AddTaskRequest::new(guild(1), user(10), "Rotate credentials"))
        .await
        .expect("task creation should succeed");

    let moderator = member(11).with_roles([role(77)]);
    let completed = services
        .tasks
        .done(guild(1), created.id(), &moderator)
        .await
        .expect("admin-role completion should succeed");

    assert_eq!(completed.status(), TaskStatus::Done);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_reflects_lifecycle_changes(services: Services) {
    let owner = member(10);
    let keep = services
        .tasks
        .add(AddTaskRequest::new(guild(1), user(10), "Keep me"))
        .await
        .expect("task creation should succeed");
    let finish = services
        .tasks
        .add(AddTaskRequest::new(guild(1), user(10), "Finish me"))
        .await
        .expect("task creation should succeed");
    let remove = services
        .tasks
        .add(AddTaskRequest::new(guild(1), user(10), "Remove me"))
        .await
        .expect("task creation should succeed");

    services
        .tasks
        .done(guild(1), finish.id(), &owner)
        .await
        .expect("completion should succeed");
    services
        .tasks
        .delete(guild(1), remove.id(), &owner)
        .await
        .expect("delete should succeed");

    let active = services
        .tasks
        .list(guild(1), ListFilter::default())
        .await
        .expect("listing should succeed");
    let done_only = services
        .tasks
        .list(guild(1), ListFilter::Status(TaskStatus::Done))
        .await
        .expect("listing should succeed");
    let everything = services
        .tasks
        .list(guild(1), ListFilter::All)
        .await
        .expect("listing should succeed");

    let active_ids: Vec<_> = active.iter().map(|task| task.id()).collect();
    assert_eq!(active_ids, vec![keep.id(), finish.id()]);
    let done_ids: Vec<_> = done_only.iter().map(|task| task.id()).collect();
    assert_eq!(done_ids, vec![finish.id()]);
    assert_eq!(everything.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_apply_only_the_provided_fields(services: Services) {
    let owner = member(10);
    let created = services
        .tasks
        .add(
            AddTaskRequest::new(guild(1), user(10), "Draft the minutes")
                .with_description("From Monday's meeting"),
        )
        .await
        .expect("task creation should succeed");

    let edited = services
        .tasks
        .edit(
            guild(1),
            created.id(),
            &owner,
            EditTaskRequest::new().with_title("Circulate the minutes"),
        )
        .await
        .expect("edit should succeed");

    assert_eq!(edited.title().as_str(), "Circulate the minutes");
    assert_eq!(edited.description(), Some("From Monday's meeting"));
    assert_eq!(edited.status(), TaskStatus::Open);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_tasks_reject_every_further_command(services: Services) {
    let owner = member(10);
    let created = services
        .tasks
        .add(AddTaskRequest::new(guild(1), user(10), "Short-lived"))
        .await
        .expect("task creation should succeed");
    services
        .tasks
        .delete(guild(1), created.id(), &owner)
        .await
        .expect("delete should succeed");

    let done = services.tasks.done(guild(1), created.id(), &owner).await;
    assert!(matches!(done, Err(TaskCommandError::InvalidTransition(_))));

    let delete = services.tasks.delete(guild(1), created.id(), &owner).await;
    assert!(matches!(
        delete,
        Err(TaskCommandError::InvalidTransition(_))
    ));

    let edit = services
        .tasks
        .edit(
            guild(1),
            created.id(),
            &owner,
            EditTaskRequest::new().with_title("Back from the dead"),
        )
        .await;
    assert!(matches!(edit, Err(TaskCommandError::InvalidTransition(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guilds_do_not_see_each_other_tasks(services: Services) {
    services
        .tasks
        .add(AddTaskRequest::new(guild(1), user(10), "Guild one task"))
        .await
        .expect("task creation should succeed");
    let other = services
        .tasks
        .add(AddTaskRequest::new(guild(2), user(10), "Guild two task"))
        .await
        .expect("task creation should succeed");

    let listed = services
        .tasks
        .list(guild(2), ListFilter::All)
        .await
        .expect("listing should succeed");

    let ids: Vec<_> = listed.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![other.id()]);

    let cross_guild = services.tasks.detail(guild(1), other.id()).await;
    assert!(matches!(
        cross_guild,
        Err(TaskCommandError::NotFound { .. })
    ));
}
