/// API key wired into both the mock feed endpoints and the feed client under test.
pub static TEST_FEED_API_KEY: &str = "test_feed_api_key";
