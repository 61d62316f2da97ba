use diesel::table;

table! {
    key_value_store (key) {
        key -> Text,
        value -> Text,
    }
}
