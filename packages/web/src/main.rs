use dioxus::prelude::*;

use store::BlogConfig;
use ui::{LoginNotice, SessionProvider};
use views::{
    DashboardAccount, DashboardComments, DashboardLayout, DashboardUsers, Home, Login, NotFound,
    PostCreate, PostDetail, PostEdit, Posts, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/posts?:page")]
        Posts { page: usize },
        #[route("/posts/create?:page")]
        PostCreate { page: usize },
        #[route("/posts/:id?:page")]
        PostDetail { id: String, page: usize },
        #[route("/posts/:id/edit")]
        PostEdit { id: String },
        #[route("/login?:notice&:signup")]
        Login { notice: LoginNotice, signup: bool },
        #[nest("/dashboard")]
            #[layout(DashboardLayout)]
                #[route("/")]
                DashboardAccount {},
                #[route("/comments?:page")]
                DashboardComments { page: usize },
                #[route("/users?:page")]
                DashboardUsers { page: usize },
            #[end_layout]
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Client configuration compiled into the bundle.
const BLOG_TOML: &str = include_str!("../blog.toml");

fn load_config() -> BlogConfig {
    match BlogConfig::from_toml(BLOG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", BlogConfig::filename(), e);
            BlogConfig::default()
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}
