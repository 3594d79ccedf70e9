mod utils {
    mod datetime;
    mod text;
}
