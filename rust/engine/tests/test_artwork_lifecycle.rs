use tarot_engine::artwork::{ArtworkSource, MemoryLoader};
use tarot_engine::cards::Locale;
use tarot_engine::session::Session;

fn confirmed_session(loader: &mut MemoryLoader, count: usize) -> Session<&mut MemoryLoader> {
    let mut s = Session::new(Locale::En, Some(31), loader, ArtworkSource::default());
    s.set_card_count(count as i64).unwrap();
    let picks: Vec<usize> = (0..count).collect();
    s.set_all(&picks).unwrap();
    s.confirm().unwrap();
    s
}

#[test]
fn reshuffle_releases_each_handle_once_before_new_loads() {
    let mut loader = MemoryLoader::serving_all(1, 1);
    {
        let mut s = confirmed_session(&mut loader, 4);
        s.reshuffle();
        s.confirm().unwrap();
    }
    // ids 1..=4 from the first reveal are released before ids 5..=8 load
    assert_eq!(&loader.releases()[..4], &[1, 2, 3, 4]);
    assert_eq!(loader.double_releases(), 0);
    assert_eq!(loader.live(), 0, "drop releases the last generation");
    assert_eq!(loader.loads(), 8);
}

#[test]
fn count_change_releases_artwork() {
    let mut loader = MemoryLoader::serving_all(1, 1);
    let mut s = confirmed_session(&mut loader, 3);
    s.set_card_count(5).unwrap();
    assert!(s.revealed().is_empty());
    drop(s);
    assert_eq!(loader.releases(), &[1, 2, 3]);
}

#[test]
fn rejected_count_change_keeps_artwork() {
    let mut loader = MemoryLoader::serving_all(1, 1);
    let mut s = confirmed_session(&mut loader, 2);
    assert!(s.set_card_count(79).is_err());
    assert_eq!(s.revealed().len(), 2);
    assert_eq!(s.release_artwork(), 2);
    assert_eq!(s.release_artwork(), 0);
    drop(s);
    assert_eq!(loader.double_releases(), 0);
}

#[test]
fn failed_loads_do_not_abort_reveal() {
    let mut loader = MemoryLoader::new();
    let s = confirmed_session(&mut loader, 6);
    assert_eq!(s.revealed().len(), 6);
    assert!(s.revealed().iter().all(|c| c.artwork.is_none()));
}

#[test]
fn many_cycles_do_not_leak() {
    let mut loader = MemoryLoader::serving_all(2, 3);
    {
        let mut s = Session::new(Locale::En, Some(5), &mut loader, ArtworkSource::default());
        s.set_card_count(78).unwrap();
        let picks: Vec<usize> = (0..78).collect();
        for _ in 0..10 {
            s.set_all(&picks).unwrap();
            s.confirm().unwrap();
            assert_eq!(s.revealed().len(), 78);
            s.reshuffle();
        }
    }
    assert_eq!(loader.loads(), 780);
    assert_eq!(loader.live(), 0);
    assert_eq!(loader.releases().len(), 780);
    assert_eq!(loader.double_releases(), 0);
}
