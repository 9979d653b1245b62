
use mockall::{mock, Sequence};
use photographer_portfolio::{
    entities::lightbox::MediaFrame,
    errors::CarrouselError,
    use_cases::carrousel::{Carrousel, FrameSlot, MediaRenderer},
    utils::assets::AssetResolver,
};
use test_media::*;

mock! {
    pub Renderer {}
    impl MediaRenderer for Renderer {
        fn render(&mut self, frame: &MediaFrame);
    }
}

fn items(n: u64) -> Vec<photographer_portfolio::entities::media::MediaItem> {
    (1..=n)
        .map(|id| TestMedia::image(id, format!("{id}.jpg")).build())
        .collect()
}

fn carrousel(n: u64, start: usize) -> Carrousel<FrameSlot> {
    Carrousel::new(items(n), start, AssetResolver::default(), FrameSlot::default()).unwrap()
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 1..=6u64 {
        for start in 0..n as usize {
            let mut c = carrousel(n, start);
            for _ in 0..n {
                c.next();
            }
            assert_eq!(c.position(), start, "n={n} start={start}");
        }
    }
}

#[test]
fn previous_n_times_returns_to_start() {
    for n in 1..=6u64 {
        for start in 0..n as usize {
            let mut c = carrousel(n, start);
            for _ in 0..n {
                c.previous();
            }
            assert_eq!(c.position(), start, "n={n} start={start}");
        }
    }
}

#[test]
fn next_and_previous_are_inverse() {
    for n in 1..=6u64 {
        for start in 0..n as usize {
            let mut c = carrousel(n, start);
            c.next();
            c.previous();
            assert_eq!(c.position(), start);
            c.previous();
            c.next();
            assert_eq!(c.position(), start);
        }
    }
}

#[test]
fn single_item_self_loops_and_rerenders() {
    let mut c = carrousel(1, 0);
    assert_eq!(c.next(), 0);
    assert_eq!(c.previous(), 0);

    let slot = c.renderer().unwrap();
    assert_eq!(slot.renders(), 3);
    assert_eq!(slot.last().unwrap().title(), "media-1");
}

#[test]
fn jump_to_sets_position_and_renders_that_item() {
    let mut c = carrousel(5, 0);
    for k in 0..5 {
        assert_eq!(c.jump_to(k), k);
        let frame = c.renderer().unwrap().last().unwrap();
        assert_eq!(frame.media_id(), c.items()[k].id);
    }
}

#[test]
fn exactly_one_element_is_visible_per_frame() {
    let mut frames = Vec::new();
    {
        let renderer = |frame: &MediaFrame| frames.push(frame.clone());
        let mut c = Carrousel::new(abc(), 0, AssetResolver::default(), renderer).unwrap();
        c.next();
        c.next();
    }

    let visibility: Vec<(bool, bool)> = frames
        .iter()
        .map(|f| (f.shows_image(), f.shows_video()))
        .collect();
    assert_eq!(visibility, vec![(true, false), (false, true), (true, false)]);
    assert!(matches!(&frames[1], MediaFrame::Video { controls: true, src, .. } if src == "/assets/images/b.mp4"));
    assert!(matches!(&frames[0], MediaFrame::Image { alt, .. } if alt == "A"));
}

#[test]
fn abc_scenario_renders_in_order() {
    let mut renderer = MockRenderer::new();
    let mut seq = Sequence::new();
    for title in ["A", "B", "C", "A", "C"] {
        renderer
            .expect_render()
            .withf(move |frame: &MediaFrame| frame.title() == title)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }

    let mut c = Carrousel::new(abc(), 0, AssetResolver::default(), renderer).unwrap();
    assert_eq!(c.next(), 1);
    assert_eq!(c.next(), 2);
    assert_eq!(c.next(), 0);
    assert_eq!(c.previous(), 2);
}

#[test]
fn update_rerenders_without_moving() {
    let mut renderer = MockRenderer::new();
    renderer
        .expect_render()
        .withf(|frame: &MediaFrame| frame.title() == "B")
        .times(2)
        .return_const(());

    let mut c = Carrousel::new(abc(), 1, AssetResolver::default(), renderer).unwrap();
    c.update();
    assert_eq!(c.position(), 1);
}

#[test]
fn empty_list_is_rejected() {
    let result = Carrousel::new(Vec::new(), 0, AssetResolver::default(), FrameSlot::default());
    assert!(matches!(result, Err(CarrouselError::EmptyMedia)));
}

#[test]
fn out_of_range_start_falls_back_to_first() {
    let c = carrousel(3, 3);
    assert_eq!(c.position(), 0);
    assert_eq!(c.renderer().unwrap().last().unwrap().title(), "media-1");
}

#[test]
fn detached_renderer_sees_nothing_more() {
    let mut renderer = MockRenderer::new();
    renderer.expect_render().times(1).return_const(());

    let mut c = Carrousel::new(abc(), 0, AssetResolver::default(), renderer).unwrap();
    let detached = c.detach();
    c.next();
    c.update();
    assert!(detached.is_some());
    assert!(!c.is_attached());
}
