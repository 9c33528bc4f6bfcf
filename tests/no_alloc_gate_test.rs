use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_flappy::core::{Game, ObstacleTrack, SimpleRng, WorldConfig};
use tui_flappy::term::{FrameBuffer, GameView, Viewport};
use tui_flappy::types::{InputEvent, Key};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Both checks live in one test: the counter is global and tests in a binary
// run in parallel.
#[test]
fn steady_state_frames_are_allocation_free() {
    // Obstacle scrolling recycles the deque's storage.
    let cfg = WorldConfig::default();
    let mut track = ObstacleTrack::new(&cfg);
    let mut rng = SimpleRng::new(42);
    for _ in 0..1_000 {
        track.advance();
        track.maybe_spawn(&mut rng);
    }
    let allocs = with_alloc_counting(|| {
        for _ in 0..10_000 {
            track.advance();
            track.maybe_spawn(&mut rng);
        }
    });
    assert_eq!(allocs, 0, "obstacle scrolling allocated");

    // Menu frames: navigate and redraw into a reused framebuffer.
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut game = Game::new(cfg, 1);
    view.render_into(&game, viewport, &mut fb);

    let down = [InputEvent::Key(Key::Down)];
    let allocs = with_alloc_counting(|| {
        for _ in 0..500 {
            game.tick(&down);
            view.render_into(&game, viewport, &mut fb);
        }
    });
    assert_eq!(allocs, 0, "menu frame allocated");
}
