mod guard;

mod layout;
pub use layout::{DashboardLayout, Shell};

mod home;
pub use home::Home;

mod not_found;
pub use not_found::NotFound;

mod login;
pub use login::Login;

mod comment_card;

mod posts;
pub use posts::Posts;

mod post_detail;
pub use post_detail::PostDetail;

mod post_form;
pub use post_form::{PostCreate, PostEdit};

mod dashboard_account;
pub use dashboard_account::DashboardAccount;

mod dashboard_comments;
pub use dashboard_comments::DashboardComments;

mod dashboard_users;
pub use dashboard_users::DashboardUsers;
