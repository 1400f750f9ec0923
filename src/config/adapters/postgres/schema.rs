//! Diesel schema for guild configuration persistence.

diesel::table! {
    /// Guild configuration records, one per guild at most.
    guild_configs (guild_id) {
        /// Guild the record belongs to.
        guild_id -> Int8,
        /// Settings payload in canonical JSON form.
        settings -> Jsonb,
        /// Timestamp of the last admin change.
        updated_at -> Nullable<Timestamptz>,
    }
}
