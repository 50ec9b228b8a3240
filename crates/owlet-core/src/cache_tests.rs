//! Tests for the query result cache.

#[cfg(test)]
mod tests {
    use crate::answer::QuestionResult;
    use crate::cache::{QueryCache, DEFAULT_CACHE_CAPACITY};
    use crate::question::{Question, QuestionType};

    fn question(head: &str, tail: &str) -> Question {
        Question::new(QuestionType::SubclassOf, head, tail)
    }

    #[test]
    fn test_get_miss_then_hit() {
        let cache = QueryCache::new(16);
        let q = question("dog", "animal");

        assert_eq!(cache.get(&q), None);

        cache.put(&q, QuestionResult::Yes);
        assert_eq!(cache.get(&q), Some(QuestionResult::Yes));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_key_ignores_request_id() {
        let cache = QueryCache::new(16);
        cache.put(&question("dog", "animal"), QuestionResult::Yes);

        // A different request asking the same triple hits.
        let repeat = question("dog", "animal").with_request_id("other-request");
        assert_eq!(cache.get(&repeat), Some(QuestionResult::Yes));
    }

    #[test]
    fn test_key_distinguishes_question_type() {
        let cache = QueryCache::new(16);
        cache.put(&question("dog", "animal"), QuestionResult::Yes);

        let instance = Question::new(QuestionType::InstanceOf, "dog", "animal");
        assert_eq!(cache.get(&instance), None);
    }

    #[test]
    fn test_dont_know_is_cacheable() {
        let cache = QueryCache::new(16);
        let q = question("pufferfish", "mammal");

        cache.put(&q, QuestionResult::DontKnow);
        assert_eq!(cache.get(&q), Some(QuestionResult::DontKnow));
    }

    #[test]
    fn test_put_overwrites_existing_key() {
        let cache = QueryCache::new(16);
        let q = question("dog", "animal");

        cache.put(&q, QuestionResult::DontKnow);
        cache.put(&q, QuestionResult::Yes);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&q), Some(QuestionResult::Yes));
    }

    #[test]
    fn test_lru_eviction_at_capacity() {
        let cache = QueryCache::new(2);

        cache.put(&question("a", "b"), QuestionResult::Yes);
        cache.put(&question("c", "d"), QuestionResult::Yes);

        // Touch (a, b) so (c, d) becomes least recently used.
        assert!(cache.get(&question("a", "b")).is_some());

        cache.put(&question("e", "f"), QuestionResult::Yes);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&question("c", "d")), None, "LRU entry evicted");
        assert!(cache.get(&question("a", "b")).is_some());
        assert!(cache.get(&question("e", "f")).is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache = QueryCache::new(16);
        cache.put(&question("a", "b"), QuestionResult::Yes);
        cache.put(&question("c", "d"), QuestionResult::No);

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get(&question("a", "b")), None);
    }

    #[test]
    fn test_default_capacity() {
        let cache = QueryCache::default();
        assert_eq!(cache.capacity(), DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_concurrent_reads_do_not_poison() {
        use std::sync::Arc;

        let cache = Arc::new(QueryCache::new(64));
        cache.put(&question("dog", "animal"), QuestionResult::Yes);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(
                            cache.get(&question("dog", "animal")),
                            Some(QuestionResult::Yes)
                        );
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.stats().hits, 800);
    }
}
