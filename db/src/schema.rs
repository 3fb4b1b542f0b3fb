table! {
    questions (id) {
        id -> Int4,
        question_text -> Text,
        pub_date -> Timestamptz,
    }
}
