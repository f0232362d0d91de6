use disclosure::CarouselOptions;
use disclosure_adapter::{Autoplay, CarouselController, Easing};

fn main() {
    // Example: the featured strip. The adapter calls tick(now_ms) every frame and writes the
    // returned translation to the real strip element.
    let mut c = CarouselController::new(CarouselOptions::responsive())
        .with_animation(400, Easing::EaseOutCubic)
        .with_autoplay(Some(Autoplay::FEATURED));
    c.set_len(4);
    c.on_viewport_width(1_024);

    let mut now_ms = 0u64;
    while now_ms <= 20_000 {
        if let Some(x) = c.tick(now_ms) {
            if !c.is_animating() {
                println!("t={now_ms} settled x={x}% state={:?}", c.carousel().state());
            }
        }
        now_ms += 16;
    }
}
