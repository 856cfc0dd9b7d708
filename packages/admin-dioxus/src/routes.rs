//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::AdminLayout;
use crate::pages::{
    AdCreate, AdDetail, Ads, AimlCategories, AimlCreate, AimlTrending, Analytics, ArticleCreate,
    ArticleEdit, Articles, Categories, Dashboard, Login, Profile, TimeSaver, TimeSaverCreate,
    Users,
};

/// All application routes. Everything under the layout is behind the auth
/// gate; role checks are per-page.
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(AdminLayout)]
        #[route("/")]
        Dashboard {},

        #[route("/articles")]
        Articles {},

        #[route("/articles/new")]
        ArticleCreate {},

        #[route("/articles/:id")]
        ArticleEdit { id: i64 },

        #[route("/categories")]
        Categories {},

        #[route("/ads")]
        Ads {},

        #[route("/ads/new")]
        AdCreate {},

        #[route("/ads/:id")]
        AdDetail { id: i64 },

        #[route("/users")]
        Users {},

        #[route("/aiml/trending")]
        AimlTrending {},

        #[route("/aiml/categories")]
        AimlCategories {},

        #[route("/aiml/new")]
        AimlCreate {},

        #[route("/time-saver")]
        TimeSaver {},

        #[route("/time-saver/new")]
        TimeSaverCreate {},

        #[route("/analytics")]
        Analytics {},

        #[route("/profile")]
        Profile {},
}
