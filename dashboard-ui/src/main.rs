mod app;
mod assets;
mod dto;

use app::App;
use leptos::*;

fn main() {
    mount_to_body(App);
}
