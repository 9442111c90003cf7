mod engine;
mod landing;
mod primitives;
mod showcase;
mod textfit;
mod tilt;

use dioxus::prelude::*;
use landing::Landing;
use showcase::{Deck, FitDemo};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/deck")]
    Deck {},
    #[route("/textfit")]
    FitDemo {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
