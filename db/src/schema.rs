table! {
    answers (id) {
        id -> Int4,
        question_id -> Int4,
        user_id -> Int4,
        body -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    questions (id) {
        id -> Int4,
        title -> Varchar,
        slug -> Varchar,
        body -> Text,
        user_id -> Int4,
        best_answer_id -> Nullable<Int4>,
        answers_count -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    users (id) {
        id -> Int4,
        name -> Varchar,
        email -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

joinable!(answers -> questions (question_id));
joinable!(answers -> users (user_id));
joinable!(questions -> users (user_id));

allow_tables_to_appear_in_same_query!(
    answers,
    questions,
    users,
);
