use yew_touchable::components::app::App;
use yew_touchable::util::init_logging;

fn main() {
    init_logging(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
