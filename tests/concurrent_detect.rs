use std::sync::Barrier;
use std::thread;
use wim_info::{detect_windows_architecture, detect_windows_version};

// Kept alone in this test binary so the alias tables are still uncompiled
// when the threads start.
#[test]
fn first_use_from_many_threads() {
    const THREADS: usize = 8;
    let barrier = Barrier::new(THREADS);

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    (
                        detect_windows_version("Windows Server 2012 R2 Standard"),
                        detect_windows_architecture("Windows Server 2012 R2 x64"),
                    )
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![("2k12r2", "amd64"); THREADS]);
}
