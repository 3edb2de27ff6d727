// Copyright 2020 TwoCookingMice

use ganache::core::frame::{FrameParams, Viewport};
use ganache::core::pixel_sampler::Supersampling;
use ganache::core::texture::Texture;
use ganache::io::write_image;
use ganache::kernels::{Sphere, SphereKernel};
use ganache::materials::{Emissive, Matte};
use ganache::math::constants::{Float, Matrix4f, Vector3f};
use ganache::math::spectrum::RGBSpectrum;
use ganache::render_targets::AccumulationBuffer;
use ganache::schedulers::{Scheduler, SimpleScheduler, TiledScheduler};
use ganache::sensors::perspective::PerspectiveCamera;
use ganache::textures::{AddressMode, FilterMode, ImageTexture};

use std::env;
use std::error::Error;
use std::sync::Arc;

struct RenderSettings {
    output_path: String,
    width: u32,
    height: u32,
    spp: u32,
    frames: u32,
    seed: u64,
    threads: Option<usize>,
    max_depth: u32,
    fov_degrees: Float,
    exposure: Float,
    progress: bool,
    sequential: bool,
}

impl RenderSettings {
    fn new(output_path: String) -> Self {
        Self {
            output_path,
            width: 320,
            height: 240,
            spp: 4,
            frames: 4,
            seed: 0,
            threads: None,
            max_depth: 2,
            fov_degrees: 45.0,
            exposure: 1.0,
            progress: false,
            sequential: false,
        }
    }

    fn parse(args: &[String]) -> Self {
        let mut settings = Self::new(args[1].clone());

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--width" => {
                    i += 1;
                    settings.width = args.get(i).and_then(|v| v.parse().ok()).unwrap_or(settings.width);
                }
                "--height" => {
                    i += 1;
                    settings.height = args.get(i).and_then(|v| v.parse().ok()).unwrap_or(settings.height);
                }
                "--spp" => {
                    i += 1;
                    settings.spp = args.get(i).and_then(|v| v.parse().ok()).unwrap_or(settings.spp);
                }
                "--frames" => {
                    i += 1;
                    settings.frames = args.get(i).and_then(|v| v.parse().ok()).unwrap_or(settings.frames);
                }
                "--seed" => {
                    i += 1;
                    settings.seed = args.get(i).and_then(|v| v.parse().ok()).unwrap_or(settings.seed);
                }
                "--threads" => {
                    i += 1;
                    settings.threads = args.get(i).and_then(|v| v.parse().ok()).or(settings.threads);
                }
                "--max-depth" => {
                    i += 1;
                    settings.max_depth = args.get(i).and_then(|v| v.parse().ok()).unwrap_or(settings.max_depth);
                }
                "--fov" => {
                    i += 1;
                    settings.fov_degrees = args.get(i).and_then(|v| v.parse().ok()).unwrap_or(settings.fov_degrees);
                }
                "--exposure" => {
                    i += 1;
                    settings.exposure = args.get(i).and_then(|v| v.parse().ok()).unwrap_or(settings.exposure);
                }
                "--progress" => settings.progress = true,
                "--sequential" => settings.sequential = true,
                other => log::warn!("ignoring unknown argument '{}'", other),
            }
            i += 1;
        }

        settings
    }
}

fn checker_texture() -> Result<ImageTexture, Box<dyn Error>> {
    let dark = RGBSpectrum::splat(0.2);
    let light = RGBSpectrum::splat(0.8);
    let texels = (0..64)
        .map(|i| if (i % 8 + i / 8) % 2 == 0 { dark } else { light })
        .collect();
    let texture = ImageTexture::from_texels(8, 8, texels)?
        .with_filter_mode(FilterMode::Nearest)
        .with_address_mode(AddressMode::Wrap);
    log::info!("{}", texture.describe());
    Ok(texture)
}

fn build_kernel(settings: &RenderSettings) -> Result<SphereKernel, Box<dyn Error>> {
    let mut kernel = SphereKernel::new(Vector3f::new(-0.4, 1.0, 0.6), RGBSpectrum::splat(2.5))
        .with_background(RGBSpectrum::new(0.05, 0.07, 0.1))
        .with_max_depth(settings.max_depth);

    kernel.add_sphere(Sphere::new(Vector3f::new(0.0, -1000.5, -3.0), 1000.0,
                                  Matte::new(RGBSpectrum::splat(1.0), 0.9).into())
        .with_texture(Arc::new(checker_texture()?)));
    kernel.add_sphere(Sphere::new(Vector3f::new(-0.6, 0.0, -3.0), 0.5,
                                  Matte::new(RGBSpectrum::new(0.8, 0.3, 0.2), 1.0)
                                      .with_ambient(RGBSpectrum::splat(0.05)).into()));
    kernel.add_sphere(Sphere::new(Vector3f::new(0.6, 0.0, -3.0), 0.5,
                                  Emissive::new(RGBSpectrum::new(1.0, 0.85, 0.6), 3.0).into()));
    Ok(kernel)
}

fn render<S: Scheduler>(scheduler: &S, settings: &RenderSettings) -> Result<(), Box<dyn Error>> {
    let kernel = build_kernel(settings)?;
    let aspect = settings.width as Float / settings.height.max(1) as Float;
    let camera = PerspectiveCamera::new(Vector3f::new(0.0, 0.4, 0.5),
                                        Vector3f::new(0.0, 0.0, -3.0),
                                        Vector3f::y(),
                                        settings.fov_degrees.to_radians(),
                                        aspect,
                                        0.01,
                                        100.0);
    log::info!("{}", camera.describe());

    let pixel_sampler = Supersampling::new(settings.spp)?;
    let viewport = Viewport::from_size(settings.width, settings.height);
    let mut target = AccumulationBuffer::new(settings.width as usize, settings.height as usize);

    // Image rows run top to bottom, NDC y runs bottom to top.
    let proj_matrix = Matrix4f::new_nonuniform_scaling(&Vector3f::new(1.0, -1.0, 1.0)) * camera.proj_matrix();

    for frame_num in 0..settings.frames {
        let params = FrameParams::new(camera.view_matrix(), proj_matrix, viewport,
                                      pixel_sampler, &mut target);
        scheduler.render_frame(&kernel, params, frame_num)?;
    }

    write_image(target.bitmap(), &settings.output_path, settings.exposure)?;
    Ok(())
}

fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <output.(exr|png)> [--width N] [--height N] [--spp N] [--frames N] \
                   [--seed N] [--threads N] [--max-depth N] [--fov DEG] [--exposure X] \
                   [--progress] [--sequential]", args[0]);
        std::process::exit(1);
    }

    let settings = RenderSettings::parse(&args);
    let result = if settings.sequential {
        render(&SimpleScheduler::new(settings.seed), &settings)
    } else {
        let mut scheduler = TiledScheduler::new(settings.seed).with_progress(settings.progress);
        if let Some(threads) = settings.threads {
            scheduler = scheduler.with_threads(threads);
        }
        render(&scheduler, &settings)
    };

    if let Err(e) = result {
        log::error!("render failed: {}", e);
        std::process::exit(1);
    }
}
