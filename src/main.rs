//! Pouch, a personal link-saving manager.
//!
//! Entry point: runs an interactive console demo walking the core flows
//! against an in-memory store.

use pouch::clock::SystemClock;
use pouch::managers::session::LinkSession;
use pouch::store::MemoryStore;
use pouch::types::filter::TagSortMode;
use pouch::types::request::Request;

fn main() {
    env_logger::init();

    println!();
    println!("Pouch v{} (demo mode)", env!("CARGO_PKG_VERSION"));
    println!();

    let mut store = MemoryStore::new();
    let clock = SystemClock;

    // Save a few links through the background dispatch surface.
    for (url, title, tags) in [
        ("https://doc.rust-lang.org/book/", "The Rust Book", vec!["rust", "reference"]),
        ("https://crates.io/", "crates.io", vec!["rust"]),
        ("https://news.ycombinator.com/", "Hacker News", vec!["news"]),
    ] {
        let request = Request::SaveLink {
            url: url.to_string(),
            title: title.to_string(),
            tags: tags.into_iter().map(str::to_string).collect(),
        };
        pouch::handler::handle_request(&mut store, &clock, request)
            .expect("save failed");
    }

    let mut session = LinkSession::new(store, clock).expect("failed to load session");
    println!("Loaded {} links", session.links().len());

    session.set_query("rust");
    println!(
        "Search \"rust\" matches {} link(s)",
        session.visible_links().len()
    );
    session.clear_filters();

    session.add_tag_filter("rust");
    for link in session.visible_links() {
        println!("  [rust] {} — {}", link.title, link.url);
    }
    session.clear_filters();

    session.set_tag_sort(TagSortMode::Count);
    println!("Tags by count:");
    for tc in session.tag_counts() {
        println!("  {} ({})", tc.tag, tc.count);
    }

    // Pocket CSV import.
    let csv = "title,url,time_added,tags,status\n\
               \"Rust by Example\",https://doc.rust-lang.org/rust-by-example/,1582312900,rust|learning,unread\n";
    let report = session.import_pocket_csv(csv).expect("csv import failed");
    println!("{}", report.message());

    // Optimistic delete with undo.
    let id = session.links()[0].id.clone();
    session.request_delete(&id).expect("delete failed");
    println!("Deleted optimistically ({} visible)", session.visible_links().len());
    session.undo_delete();
    println!("Undone ({} visible)", session.visible_links().len());

    println!();
    println!("Export file name: {}", session.export_file_name());
    println!("Done.");
}
