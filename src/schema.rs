table! {
    sources (id) {
        id -> Text,
        name -> Text,
        domain -> Text,
        created_at -> Timestamp,
        deleted_at -> Nullable<Timestamp>,
    }
}

table! {
    sub_sources (id) {
        id -> Text,
        name -> Text,
        external_identifier -> Text,
        avatar_url -> Text,
        origin_url -> Text,
        is_from_shared_post -> Bool,
        source_id -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        deleted_at -> Nullable<Timestamp>,
    }
}

joinable!(sub_sources -> sources (source_id));

allow_tables_to_appear_in_same_query!(sources, sub_sources,);
