//! Tests for progress tracking and multi-file batch processing

#[cfg(test)]
mod tests {
    use mosaic_pd::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use mosaic_pd::io::progress::ProgressManager;
    use std::path::Path;

    // Tests a single file lifecycle
    // Verified by setting wrong initial state
    #[test]
    fn test_single_file_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);

        let bar = pm.start_file(Path::new("mosaics.txt"), 10);
        bar.inc(4);
        assert_eq!(bar.position(), 4);
        assert_eq!(bar.length(), Some(10));

        pm.complete_file(&bar, "1 mosaics");
        assert!(bar.is_finished());
        pm.finish();
    }

    // Tests default trait implementation
    #[test]
    fn test_progress_manager_default() {
        let mut pm = ProgressManager::default();
        pm.initialize(0);
        let bar = pm.start_file(Path::new("empty.txt"), 0);
        pm.complete_file(&bar, "0 mosaics");
        pm.finish();
    }

    // Tests many files rotate their bars behind a batch bar
    // Verified by never removing the oldest bar
    #[test]
    fn test_batch_mode() {
        let mut pm = ProgressManager::new();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        pm.initialize(file_count);

        for index in 0..file_count {
            let name = format!("list_{index}.txt");
            let bar = pm.start_file(Path::new(&name), 2);
            bar.inc(2);
            pm.complete_file(&bar, "done");
        }
        pm.finish();
    }

    // Tests bars can be advanced from worker threads
    #[test]
    fn test_bar_shared_across_threads() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        let bar = pm.start_file(Path::new("parallel.txt"), 8);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let bar = bar.clone();
                scope.spawn(move || {
                    bar.inc(2);
                });
            }
        });

        assert_eq!(bar.position(), 8);
        pm.complete_file(&bar, "done");
        pm.finish();
    }
}
