#[cfg(debug_assertions)]
pub fn get_contact_endpoint() -> &'static str {
    "http://localhost:3001/api/contact" // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_contact_endpoint() -> &'static str {
    "/api/contact" // Same-origin in production
}
