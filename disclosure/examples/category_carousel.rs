// Example: loop through four categories, four per view, across the lap boundary.
use disclosure::{CarouselOptions, CircularCarousel};

fn main() {
    let categories = ["rings", "earrings", "necklaces", "bracelets"];
    let mut c = CircularCarousel::with_len(CarouselOptions::new(4), categories.len());

    for _ in 0..5 {
        let step = c.next().expect("carousel is looping");
        let visible: Vec<_> = (0..c.view_size())
            .filter_map(|slot| c.pick(&categories, slot))
            .collect();
        println!(
            "target={} settled={} corrected={} x={}% {visible:?}",
            step.target,
            step.settled,
            step.corrected,
            c.translate_percent()
        );
    }

    // Fewer items than the view: looping is disabled and commands are ignored.
    let mut small = CircularCarousel::with_len(CarouselOptions::new(4), 2);
    println!("static: {:?} next={:?}", small.state(), small.next());
}
