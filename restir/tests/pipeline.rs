use approx::assert_relative_eq;
use glam::{uvec2, vec3, vec4, Mat4, UVec2, Vec3, Vec4};
use restir::{
    Camera, Config, Error, Evaluator, FrameInputs, PathReservoir, Ray, Restir,
};

struct AlwaysVisible;

impl Evaluator for AlwaysVisible {
    fn is_visible(&self, _: Ray, _: u32) -> bool {
        true
    }
}

struct NeverVisible;

impl Evaluator for NeverVisible {
    fn is_visible(&self, _: Ray, _: u32) -> bool {
        false
    }
}

struct TestScene {
    visible_points: Vec<Vec4>,
    visible_normals: Vec<Vec4>,
    sample_points: Vec<Vec4>,
    sample_normals: Vec<Vec4>,
    sample_radiance: Vec<Vec4>,
    sample_pdfs: Vec<f32>,
    motion_vectors: Vec<Vec4>,
    depths: Vec<f32>,
    normals: Vec<Vec4>,
}

impl TestScene {
    /// A flat wall facing the camera; every pixel's candidate samples a point
    /// straight above its visible point, with unit radiance and unit PDFs.
    fn flat_wall(viewport: UVec2) -> Self {
        let mut this = Self::empty();

        for y in 0..viewport.y {
            for x in 0..viewport.x {
                this.visible_points
                    .push(vec4(x as f32, y as f32, 0.0, 0.0));
                this.visible_normals.push(vec4(0.0, 0.0, 1.0, 0.0));
                this.sample_points
                    .push(vec4(x as f32, y as f32, 1.0, 0.0));
                this.sample_normals.push(vec4(0.0, 0.0, -1.0, 0.0));
                this.sample_radiance.push(vec4(1.0, 1.0, 1.0, 0.0));
                this.sample_pdfs.push(1.0);
                this.motion_vectors.push(Vec4::ZERO);
                this.depths.push(10.0);
                this.normals.push(vec4(0.0, 0.0, 1.0, 0.0));
            }
        }

        this
    }

    /// A frame where every pixel misses the scene.
    fn miss(viewport: UVec2) -> Self {
        let mut this = Self::flat_wall(viewport);

        for depth in &mut this.depths {
            *depth = 0.0;
        }

        this
    }

    fn empty() -> Self {
        Self {
            visible_points: Vec::new(),
            visible_normals: Vec::new(),
            sample_points: Vec::new(),
            sample_normals: Vec::new(),
            sample_radiance: Vec::new(),
            sample_pdfs: Vec::new(),
            motion_vectors: Vec::new(),
            depths: Vec::new(),
            normals: Vec::new(),
        }
    }

    fn inputs(&self) -> FrameInputs {
        FrameInputs {
            visible_points: &self.visible_points,
            visible_normals: &self.visible_normals,
            sample_points: &self.sample_points,
            sample_normals: &self.sample_normals,
            sample_radiance: &self.sample_radiance,
            sample_pdfs: &self.sample_pdfs,
            motion_vectors: &self.motion_vectors,
            depths: &self.depths,
            normals: &self.normals,
        }
    }
}

fn config() -> Config {
    Config {
        seed: Some(0xcafebabe),
        ..Default::default()
    }
}

/// Maps the world-space origin into the single pixel of a 1x1 viewport.
fn camera_1x1() -> Camera {
    Camera::new(
        Mat4::from_translation(vec3(-0.5, 0.5, 0.0)),
        Vec3::NEG_Z * 10.0,
        uvec2(1, 1),
    )
}

#[test]
fn shades_single_unit_candidate() {
    // One pixel, one candidate with unit target and source PDF, no history,
    // no neighbors: the output must be exactly the sample's radiance

    let mut restir = Restir::new(config());
    let scene = TestScene::flat_wall(uvec2(1, 1));
    let mut output = vec![Vec4::ZERO; 1];

    restir
        .render(&camera_1x1(), scene.inputs(), &AlwaysVisible, &mut output)
        .unwrap();

    assert_relative_eq!(1.0, output[0].x, epsilon = 0.001);
    assert_relative_eq!(1.0, output[0].y, epsilon = 0.001);
    assert_relative_eq!(1.0, output[0].z, epsilon = 0.001);
    assert_eq!(1.0, output[0].w);
}

#[test]
fn shades_empty_candidate_black() {
    let mut restir = Restir::new(config());

    let mut scene = TestScene::flat_wall(uvec2(1, 1));

    scene.sample_radiance[0] = Vec4::ZERO;

    let mut output = vec![Vec4::ONE; 1];

    restir
        .render(&camera_1x1(), scene.inputs(), &AlwaysVisible, &mut output)
        .unwrap();

    assert_eq!(Vec4::ZERO, output[0]);
}

#[test]
fn shades_occluded_sample_black() {
    let mut restir = Restir::new(config());
    let scene = TestScene::flat_wall(uvec2(1, 1));
    let mut output = vec![Vec4::ONE; 1];

    restir
        .render(&camera_1x1(), scene.inputs(), &NeverVisible, &mut output)
        .unwrap();

    assert_eq!(Vec4::ZERO, output[0]);
}

#[test]
fn accumulates_temporal_history() {
    let mut restir = Restir::new(config());
    let camera = camera_1x1();
    let scene = TestScene::flat_wall(uvec2(1, 1));
    let mut output = vec![Vec4::ZERO; 1];

    for frame in 0..3 {
        restir
            .render(&camera, scene.inputs(), &AlwaysVisible, &mut output)
            .unwrap();

        let reservoir = PathReservoir::read(
            &restir.buffers().unwrap().spatial,
            0,
        );

        // Each frame merges one fresh candidate on top of the reprojected
        // history, so the sample count grows by one...
        assert_relative_eq!(
            (frame + 1) as f32,
            reservoir.m,
            epsilon = 0.001
        );

        // ...while the contribution weight stays unbiased
        assert_relative_eq!(1.0, reservoir.w, epsilon = 0.001);
        assert_relative_eq!(1.0, output[0].x, epsilon = 0.001);
    }

    assert_eq!(3, restir.params().frame);
}

#[test]
fn reallocates_buffers_on_resolution_change() {
    let mut restir = Restir::new(config());

    // Prime the pipeline with a bright 1x1 frame...
    let scene = TestScene::flat_wall(uvec2(1, 1));
    let mut output = vec![Vec4::ZERO; 1];

    restir
        .render(&camera_1x1(), scene.inputs(), &AlwaysVisible, &mut output)
        .unwrap();

    assert_eq!(4, restir.buffers().unwrap().initial.len());
    assert!(output[0].x > 0.0);

    // ...then grow the viewport; the old reservoirs must be gone, so a frame
    // full of misses shades to pure black everywhere

    let viewport = uvec2(2, 2);
    let camera = Camera::new(Mat4::IDENTITY, Vec3::NEG_Z * 10.0, viewport);
    let scene = TestScene::miss(viewport);
    let mut output = vec![Vec4::ONE; 4];

    restir
        .render(&camera, scene.inputs(), &AlwaysVisible, &mut output)
        .unwrap();

    assert_eq!(4 * 4, restir.buffers().unwrap().initial.len());

    for color in output {
        assert_eq!(Vec4::ZERO, color);
    }
}

/// Shrinking the viewport must drop the camera history along with the
/// buffers; reprojecting through the old camera would yield previous-frame
/// pixel coordinates that no longer fit the freshly allocated temporal half.
#[test]
fn resets_history_when_viewport_shrinks() {
    let mut restir = Restir::new(config());

    // A 2x2 camera that maps the world-space origin to its pixel (1, 1) -
    // the last index of the 2x2 reservoir buffers
    let camera = Camera::new(
        Mat4::from_translation(vec3(0.25, -0.25, 0.0)),
        Vec3::NEG_Z * 10.0,
        uvec2(2, 2),
    );

    let scene = TestScene::flat_wall(uvec2(2, 2));
    let mut output = vec![Vec4::ZERO; 4];

    restir
        .render(&camera, scene.inputs(), &AlwaysVisible, &mut output)
        .unwrap();

    // Now shrink to 1x1; the single pixel's visible point sits at the origin,
    // so a stale camera history would look its temporal candidate up at the
    // old pixel (1, 1), past the end of the reallocated buffers

    let scene = TestScene::flat_wall(uvec2(1, 1));
    let mut output = vec![Vec4::ZERO; 1];

    restir
        .render(&camera_1x1(), scene.inputs(), &AlwaysVisible, &mut output)
        .unwrap();

    let reservoir =
        PathReservoir::read(&restir.buffers().unwrap().spatial, 0);

    // No history survives the resize
    assert_relative_eq!(1.0, reservoir.m, epsilon = 0.001);
    assert_relative_eq!(1.0, output[0].x, epsilon = 0.001);
}

#[test]
fn replays_deterministically_with_fixed_seed() {
    let viewport = uvec2(8, 8);
    let camera = Camera::new(Mat4::IDENTITY, Vec3::NEG_Z * 10.0, viewport);

    let mut scene = TestScene::flat_wall(viewport);

    // Vary the radiance so that spatial reuse actually has choices to make
    for (idx, radiance) in scene.sample_radiance.iter_mut().enumerate() {
        *radiance = Vec4::splat(1.0 + (idx % 5) as f32);
    }

    let render = || {
        let mut restir = Restir::new(config());
        let mut output = vec![Vec4::ZERO; 64];

        for _ in 0..2 {
            restir
                .render(&camera, scene.inputs(), &AlwaysVisible, &mut output)
                .unwrap();
        }

        output
    };

    assert_eq!(render(), render());
}

#[test]
fn rejects_mismatched_buffers() {
    let mut restir = Restir::new(config());
    let scene = TestScene::flat_wall(uvec2(1, 1));
    let mut output = vec![Vec4::ZERO; 2];

    let result = restir.render(
        &camera_1x1(),
        scene.inputs(),
        &AlwaysVisible,
        &mut output,
    );

    assert!(matches!(
        result,
        Err(Error::BufferSizeMismatch {
            name: "output",
            expected: 1,
            actual: 2,
        })
    ));
}

#[test]
fn rejects_empty_viewport() {
    let mut restir = Restir::new(config());
    let scene = TestScene::flat_wall(uvec2(1, 1));
    let mut output = vec![Vec4::ZERO; 1];

    let camera = Camera::new(Mat4::IDENTITY, Vec3::ZERO, uvec2(0, 0));

    let result =
        restir.render(&camera, scene.inputs(), &AlwaysVisible, &mut output);

    assert!(matches!(result, Err(Error::InvalidViewportSize { .. })));
}
