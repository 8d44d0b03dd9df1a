//! Diesel schema for the marketplace task tables.

diesel::table! {
    /// Tasks posted by customers.
    task (id) {
        /// Task identifier.
        id -> Int4,
        /// Short task title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Where the task takes place.
        #[max_length = 255]
        location -> Varchar,
        /// Optional image reference.
        #[max_length = 255]
        image -> Nullable<Varchar>,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional reference to the selected offer.
        selected_offer -> Nullable<Int4>,
        /// Owning customer.
        customer_id -> Int4,
        /// Task category.
        category_id -> Int4,
    }
}

diesel::table! {
    /// Customer accounts, one per posting user.
    customer (id) {
        /// Customer identifier.
        id -> Int4,
        /// User behind the customer account.
        user_id -> Int4,
    }
}

diesel::table! {
    /// Marketplace users. The SQL name is a reserved word, so Diesel quotes it.
    #[sql_name = "user"]
    users (id) {
        /// User identifier.
        id -> Int4,
        /// Given name.
        #[max_length = 100]
        firstname -> Varchar,
        /// Family name.
        #[max_length = 100]
        lastname -> Varchar,
        /// Login e-mail.
        #[max_length = 255]
        email -> Varchar,
    }
}

diesel::table! {
    /// Task categories.
    category (id) {
        /// Category identifier.
        id -> Int4,
        /// Display name.
        #[max_length = 100]
        name -> Varchar,
    }
}

diesel::joinable!(task -> customer (customer_id));
diesel::joinable!(task -> category (category_id));
diesel::joinable!(customer -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(category, customer, task, users);
