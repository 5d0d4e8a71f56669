pub static ROOT_API: &'static str = "https://notes-api.dicoding.dev/v2";
pub static API_NOTES: &'static str = "notes";

pub static STATUS_SUCCESS: &'static str = "success";
