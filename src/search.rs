use crate::api::User;
use crate::app::AppState;

/// Case-insensitive substring match on name, email or company name.
/// `needle` must already be lowercase.
pub fn matches(user: &User, needle: &str) -> bool {
    needle.is_empty()
        || user.name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
        || user.company.name.to_lowercase().contains(needle)
}

pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let q = query.to_lowercase();
    users.iter().filter(|u| matches(u, &q)).cloned().collect()
}

/// Search term changed: re-derive the filtered list and go back to page 1.
pub fn apply_search(app: &mut AppState) {
    app.users = filter_users(&app.users_all, &app.search_query);
    app.paging.reset();
    app.selected_row = 0;
}

/// Cached list changed: re-derive the filtered list and keep the page in range.
pub fn refresh_filtered(app: &mut AppState) {
    app.users = filter_users(&app.users_all, &app.search_query);
    app.paging.clamp(app.users.len());
    let on_page = app.page_users().len();
    app.selected_row = app.selected_row.min(on_page.saturating_sub(1));
}
