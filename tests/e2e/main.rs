// End-to-end tests for the voicebox HTTP API
//
// Each test spins up the full axum application on an ephemeral port with a
// mock speech provider injected behind the SynthesisClient trait. Tests
// exercise the real router, middleware and controllers; only the outbound
// Google call is replaced.

mod test_health;
mod test_synthesis;
