use itunes_dashboard::itunes::extract_tracks;
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).expect("Usage: list_albums <Library.xml>");

    let tracks = extract_tracks(Path::new(path)).expect("Failed to parse library");

    println!("Library: {}", path);
    println!("Tracks kept: {}", tracks.len());
    println!();

    println!(
        "{:>4} | {:>10} | {:>5} | Artist - Album",
        "Pos", "Released", "Plays"
    );
    println!("{}", "-".repeat(80));

    for (pos, track) in tracks.iter().enumerate() {
        println!(
            "{:4} | {} | {:5} | {} - {}",
            pos + 1,
            track.release_date,
            track.play_count,
            track.artist,
            track.album
        );
    }
}
