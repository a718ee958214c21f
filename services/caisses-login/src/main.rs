use caisses_login::app::Main;

fn main() {
    yew::Renderer::<Main>::new().render();
}
