// Example: reveal a product grid eight items at a time as the viewport nears the bottom.
use disclosure::{ListWindower, ScrollMetrics, WindowerOptions};

fn main() {
    let products: Vec<String> = (1..=20).map(|i| format!("ring-{i:02}")).collect();

    let mut w = ListWindower::new(WindowerOptions::default());
    w.initialize(&products);
    println!("initial: {:?}", w.state());

    // Each row is 300 units tall with four items per row; the viewport is 900 units.
    let row = 300u64;
    let mut offset = 0u64;
    while w.has_more() {
        let rows = w.visible_len().div_ceil(4) as u64;
        let metrics = ScrollMetrics::new(900, offset, rows * row);
        if w.on_scroll(metrics) {
            println!(
                "offset={offset} distance={} revealed={}",
                metrics.distance_to_end(),
                w.visible(&products).len()
            );
        }
        offset += 150;
    }

    println!("last visible: {:?}", w.visible(&products).last());
}
