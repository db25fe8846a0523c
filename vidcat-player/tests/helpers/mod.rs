//! Shared fixtures for session integration tests

use vidcat_common::{Video, VideoLibrary};
use vidcat_player::Session;

/// Two-video catalogue: A(a1, [fun]) and B(b1, [fun, 2020])
pub fn fun_library() -> VideoLibrary {
    VideoLibrary::new(vec![
        Video::new("a1", "A", ["fun"]),
        Video::new("b1", "B", ["fun", "2020"]),
    ])
    .unwrap()
}

/// Catalogue shaped like the sample library shipped with the player
pub fn sample_library() -> VideoLibrary {
    VideoLibrary::new(vec![
        Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
        Video::new("another_cat_video_id", "Another Cat Video", ["#cat", "#animal"]),
        Video::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
        Video::new("life_at_google_video_id", "Life at Google", ["#google", "#career"]),
        Video::new("nothing_video_id", "Video about nothing", Vec::<String>::new()),
    ])
    .unwrap()
}

pub fn fun_session() -> Session<VideoLibrary> {
    Session::with_seed(fun_library(), 1)
}

pub fn sample_session() -> Session<VideoLibrary> {
    Session::with_seed(sample_library(), 1)
}

/// Render a list of events the way they are reported
pub fn lines<T: ToString>(events: &[T]) -> Vec<String> {
    events.iter().map(ToString::to_string).collect()
}
