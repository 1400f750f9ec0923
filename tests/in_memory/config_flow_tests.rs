//! In-memory integration tests for guild configuration commands.

use rstest::rstest;
use taskwarden::config::{
    domain::TaskVisibility,
    services::{ConfigCommandError, UpdateSettingsRequest},
};

use super::helpers::{Services, guild, member, platform_admin, role, services};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unconfigured_guild_resolves_to_defaults(services: Services) {
    let config = services
        .config
        .get(guild(1))
        .await
        .expect("default resolution should succeed");

    assert_eq!(
        config.settings().default_visibility(),
        TaskVisibility::Public
    );
    assert_eq!(config.settings().admin_role(), None);
    assert_eq!(config.settings().notification_channel(), None);
    assert_eq!(config.updated_at(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn settings_survive_successive_writes(services: Services) {
    let admin = platform_admin(1);

    services
        .config
        .set(
            guild(1),
            &admin,
            UpdateSettingsRequest::new()
                .with_entry("admin_role", "77")
                .with_entry("default_visibility", "private"),
        )
        .await
        .expect("settings update should succeed");
    services
        .config
        .set(
            guild(1),
            &admin,
            UpdateSettingsRequest::new().with_entry("notification_channel", "900"),
        )
        .await
        .expect("settings update should succeed");

    let config = services
        .config
        .get(guild(1))
        .await
        .expect("get should succeed");

    assert_eq!(config.settings().admin_role(), Some(role(77)));
    assert_eq!(
        config.settings().default_visibility(),
        TaskVisibility::Private
    );
    assert!(config.settings().notification_channel().is_some());
    assert!(config.updated_at().is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_the_admin_role_reverts_to_platform_admins_only(services: Services) {
    let admin = platform_admin(1);
    services
        .config
        .set(
            guild(1),
            &admin,
            UpdateSettingsRequest::new().with_entry("admin_role", "77"),
        )
        .await
        .expect("settings update should succeed");

    let moderator = member(9).with_roles([role(77)]);
    services
        .config
        .set(
            guild(1),
            &moderator,
            UpdateSettingsRequest::new().with_entry("admin_role", ""),
        )
        .await
        .expect("clearing the role should succeed");

    // The former role holder no longer carries admin standing.
    let retry = services
        .config
        .set(
            guild(1),
            &moderator,
            UpdateSettingsRequest::new().with_entry("default_visibility", "private"),
        )
        .await;
    assert!(matches!(retry, Err(ConfigCommandError::Permission(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_admin_writes_are_rejected_per_guild(services: Services) {
    let admin = platform_admin(1);
    services
        .config
        .set(
            guild(1),
            &admin,
            UpdateSettingsRequest::new().with_entry("admin_role", "77"),
        )
        .await
        .expect("settings update should succeed");

    // Holding guild one's admin role grants nothing in guild two.
    let moderator = member(9).with_roles([role(77)]);
    let result = services
        .config
        .set(
            guild(2),
            &moderator,
            UpdateSettingsRequest::new().with_entry("default_visibility", "private"),
        )
        .await;

    assert!(matches!(result, Err(ConfigCommandError::Permission(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_entries_leave_the_record_untouched(services: Services) {
    let admin = platform_admin(1);
    services
        .config
        .set(
            guild(1),
            &admin,
            UpdateSettingsRequest::new().with_entry("default_visibility", "private"),
        )
        .await
        .expect("settings update should succeed");

    let result = services
        .config
        .set(
            guild(1),
            &admin,
            UpdateSettingsRequest::new()
                .with_entry("default_visibility", "public")
                .with_entry("reminder_cadence", "daily"),
        )
        .await;
    assert!(matches!(result, Err(ConfigCommandError::Validation(_))));

    let config = services
        .config
        .get(guild(1))
        .await
        .expect("get should succeed");
    assert_eq!(
        config.settings().default_visibility(),
        TaskVisibility::Private
    );
}
