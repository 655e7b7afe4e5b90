use crate::core::data::pixel_image::PixelImage;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

/// Presents composed frames through a fixed-size pixels framebuffer, with
/// the egui overlay rendered on top of the scaling pass.
///
/// The framebuffer stays at the panel resolution; only the surface follows
/// the window, so pixels handles any hidpi scaling.
pub struct FramePresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl FramePresenter {
    pub fn new(window: &'static Window, buffer_width: u32, buffer_height: u32) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(buffer_width, buffer_height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            width: buffer_width,
            height: buffer_height,
        }
    }

    pub fn render(
        &mut self,
        frame: &PixelImage,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        self.copy_frame_into_pixels(frame);

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            // Upload new/changed egui textures
            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            // Update egui buffers (vertices, indices)
            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of the composed frame
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep pixels content
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            // Free textures no longer needed
            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    /// Resizes the presentation surface. The pixel buffer itself keeps the
    /// panel resolution.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
    }

    fn copy_frame_into_pixels(&mut self, frame: &PixelImage) {
        let expected_rgba_len = (self.width as usize) * (self.height as usize) * 4;
        let src = frame.buffer();
        let dest = self.pixels.frame_mut();

        assert_eq!(
            dest.len(),
            expected_rgba_len,
            "pixels frame length {} does not match expected {} for {}x{}",
            dest.len(),
            expected_rgba_len,
            self.width,
            self.height
        );

        for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
            dst_pixel[0] = src_pixel[0];
            dst_pixel[1] = src_pixel[1];
            dst_pixel[2] = src_pixel[2];
            dst_pixel[3] = 255;
        }
    }
}
