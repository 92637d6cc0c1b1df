//! Whole-scene assembly: turns a [`SceneParams`](orrery_config::SceneParams)
//! table into an ordered sequence of host calls covering the sky, the
//! bodies and their materials, the asteroid belt, the camera fly-through,
//! and best-effort render cosmetics.

mod assembler;

pub use assembler::{AssembleError, BodyError, SceneAssembler, SceneReport};
