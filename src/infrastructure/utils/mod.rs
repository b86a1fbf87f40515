pub mod valid_id;
