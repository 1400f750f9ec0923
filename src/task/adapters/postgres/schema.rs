//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records scoped to their guild.
    tasks (guild_id, id) {
        /// Guild the task belongs to.
        guild_id -> Int8,
        /// Task identifier, unique within its guild.
        id -> Uuid,
        /// User who created the task.
        owner_id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Task lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
