use std::sync::{Arc, Mutex};

use disclosure::{RevealTicket, ScrollMetrics};
use disclosure_adapter::{Paginator, ScrollHub};

fn main() {
    // Example: a filter-keyed grid whose reveals complete one frame later (e.g. after images
    // for the next batch decoded). The view registers with the hub on mount and unregisters on
    // unmount; the platform glue only calls `dispatch`.
    let paginator = Arc::new(Mutex::new(Paginator::<&'static str>::default()));
    let pending: Arc<Mutex<Option<RevealTicket>>> = Arc::new(Mutex::new(None));

    let mut hub = ScrollHub::new();
    let listener = hub.subscribe({
        let paginator = Arc::clone(&paginator);
        let pending = Arc::clone(&pending);
        move |m: ScrollMetrics| {
            if let Some(ticket) = paginator.lock().unwrap().on_scroll(m) {
                *pending.lock().unwrap() = Some(ticket);
            }
        }
    });

    {
        let mut p = paginator.lock().unwrap();
        p.set_filter("necklaces");
        p.set_source(30);
    }

    for frame in 0..6u64 {
        hub.dispatch(ScrollMetrics::new(900, 1_000 + frame * 400, 2_400 + frame * 400));
        if let Some(ticket) = pending.lock().unwrap().take() {
            let outcome = paginator.lock().unwrap().complete(ticket);
            println!("frame={frame} outcome={outcome:?}");
        }
        println!("frame={frame} state={:?}", paginator.lock().unwrap().state());
    }

    hub.unsubscribe(listener);
}
