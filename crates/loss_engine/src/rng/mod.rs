//! # Random Number Generation
//!
//! Every simulation worker owns a private [`SimRng`]. Workers never share
//! generator state, so no locking is needed on the sampling hot path.
//!
//! ## Stream Derivation
//!
//! The coordinator holds a master generator and draws one child seed per
//! work unit up front with [`SimRng::spawn_stream`]. Child streams are seeded
//! independently, giving statistically independent draws across workers.
//!
//! ```rust
//! use loss_engine::rng::SimRng;
//! use rand::Rng;
//! use rand_distr::{Distribution, Poisson};
//!
//! let mut master = SimRng::from_entropy();
//! let mut worker_a = master.spawn_stream();
//! let mut worker_b = master.spawn_stream();
//!
//! let u: f64 = worker_a.gen();
//! assert!((0.0..1.0).contains(&u));
//! let events: f64 = Poisson::new(1.5).unwrap().sample(&mut worker_b);
//! assert!(events >= 0.0);
//! ```

mod prng;

pub use prng::SimRng;
