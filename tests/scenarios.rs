// Integration tests only touch the simulation core.
#![allow(unused_crate_dependencies)]

use particle_field::error::Result;
use particle_field::{Attraction, FieldConfig, FieldState, Particle, ParticleSet, Pointer};

/// Two still particles 100px apart: linked under a 150px threshold, not under 50px.
#[test]
fn two_particles_link_only_under_threshold() {
	let set = ParticleSet::from_particles(vec![
		Particle::new(0.0, 0.0, 0.0, 0.0, 1.0),
		Particle::new(100.0, 0.0, 0.0, 0.0, 2.0),
	]);

	let mut marks = Vec::new();
	let mut edges = Vec::new();
	set.render(150.0, |x, y, r| marks.push((x, y, r)), |x1, y1, x2, y2| {
		edges.push([x1, y1, x2, y2])
	});
	assert_eq!(marks.len(), 2);
	assert_eq!(edges, vec![[0.0, 0.0, 100.0, 0.0]]);

	let mut marks = 0;
	let mut edges = 0;
	set.render(50.0, |_, _, _| marks += 1, |_, _, _, _| edges += 1);
	assert_eq!(marks, 2);
	assert_eq!(edges, 0);
}

/// A particle drifting left from x=5 in a 100-wide surface bounces once it passes x=0.
#[test]
fn left_drift_bounces_after_crossing_zero() {
	let mut set = ParticleSet::from_particles(vec![Particle::new(5.0, 50.0, -1.0, 0.0, 1.0)]);
	let attraction = Attraction::default();

	set.step(None, 100.0, 100.0, &attraction);
	let p = &set.as_slice()[0];
	assert_eq!((p.x, p.y), (4.0, 50.0));
	assert_eq!((p.vx, p.vy), (-1.0, 0.0));

	let mut flipped_at = None;
	for i in 1..=5 {
		set.step(None, 100.0, 100.0, &attraction);
		let p = &set.as_slice()[0];
		if p.vx > 0.0 && flipped_at.is_none() {
			flipped_at = Some(i);
			assert!(p.x < 0.0, "flip detected at x = {}", p.x);
		}
	}
	let p = &set.as_slice()[0];
	assert_eq!(flipped_at, Some(5));
	assert_eq!(p.x, -1.0);
	assert_eq!(p.vx, 1.0);

	set.step(None, 100.0, 100.0, &attraction);
	assert_eq!(set.as_slice()[0].x, 0.0);
}

/// Full host-style loop: build from config, tick with a pointer, resize, keep ticking.
#[test]
fn field_survives_resize_mid_animation() -> Result<()> {
	let config = FieldConfig::from_json(r#"{ "particle_count": 80, "seed": 99 }"#)?;
	let seed = config.seed.unwrap_or_default();
	let mut state = FieldState::new(config, 1280.0, 720.0, seed)?;

	state.set_pointer(Some(Pointer::new(640.0, 360.0)));
	for _ in 0..120 {
		state.tick();
	}
	state.resize(400.0, 300.0)?;
	state.set_pointer(None);
	for _ in 0..120 {
		state.tick();
	}

	assert_eq!(state.frame, 240);
	assert_eq!(state.particles.len(), 80);
	let eps = 0.75 + 1e-9;
	for p in state.particles.iter() {
		assert!(p.x >= -eps && p.x <= 400.0 + eps);
		assert!(p.y >= -eps && p.y <= 300.0 + eps);
	}

	let links: Vec<_> = state
		.particles
		.connections(state.config.max_connect_distance)
		.collect();
	let ps = state.particles.as_slice();
	for (a, b) in links {
		assert!(a < b);
		assert!(ps[a].distance_to(&ps[b]) < state.config.max_connect_distance);
	}
	Ok(())
}
