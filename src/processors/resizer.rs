// imgprep/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage};

/// How a source image is brought to the target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitPlan {
    /// Stretch the whole image to exactly the target size.
    Resize { width: u32, height: u32 },
    /// Cut a target-sized window starting at (`x`, `y`).
    Crop { x: u32, y: u32, width: u32, height: u32 },
}

pub struct Resizer {
    algorithm: ResizeAlgorithm,
    target_width: u32,
    target_height: u32,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm, target: (u32, u32)) -> Self {
        Self {
            algorithm,
            target_width: target.0,
            target_height: target.1,
        }
    }

    /// Picks resize or center crop for a `width` x `height` source.
    ///
    /// Any axis smaller than the target forces a resize of the whole image;
    /// otherwise the window is centered with offsets rounded down.
    pub fn plan(&self, width: u32, height: u32) -> FitPlan {
        let (target_w, target_h) = (self.target_width, self.target_height);

        if height < target_h || width < target_w {
            return FitPlan::Resize {
                width: target_w,
                height: target_h,
            };
        }

        let start_row = (height as f64 / 2.0 - target_h as f64 / 2.0).floor();
        let start_col = (width as f64 / 2.0 - target_w as f64 / 2.0).floor();

        FitPlan::Crop {
            x: start_col as u32,
            y: start_row as u32,
            width: target_w,
            height: target_h,
        }
    }

    pub fn fit(&self, image: &DynamicImage) -> (DynamicImage, FitPlan) {
        let plan = self.plan(image.width(), image.height());

        let fitted = match plan {
            FitPlan::Resize { width, height } => {
                log::debug!(
                    "Resizing image from {}x{} to {}x{}",
                    image.width(),
                    image.height(),
                    width,
                    height
                );
                image.resize_exact(width, height, self.get_filter_type())
            }
            FitPlan::Crop { x, y, width, height } => {
                log::debug!(
                    "Cropping {}x{} window at ({}, {}) from {}x{}",
                    width,
                    height,
                    x,
                    y,
                    image.width(),
                    image.height()
                );
                // crop_imm keeps whatever part of the window lies inside the buffer
                image.crop_imm(x, y, width, height)
            }
        };

        (fitted, plan)
    }

    fn get_filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let buffer = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 7]));
        DynamicImage::ImageRgb8(buffer)
    }

    #[test]
    fn smaller_on_either_axis_resizes() {
        let resizer = Resizer::new(ResizeAlgorithm::Bilinear, (100, 100));
        let expected = FitPlan::Resize {
            width: 100,
            height: 100,
        };

        assert_eq!(resizer.plan(50, 50), expected);
        assert_eq!(resizer.plan(500, 99), expected);
        assert_eq!(resizer.plan(99, 500), expected);
    }

    #[test]
    fn large_enough_crops_from_center() {
        let resizer = Resizer::new(ResizeAlgorithm::Bilinear, (100, 100));
        assert_eq!(
            resizer.plan(200, 200),
            FitPlan::Crop {
                x: 50,
                y: 50,
                width: 100,
                height: 100
            }
        );
        assert_eq!(
            resizer.plan(100, 100),
            FitPlan::Crop {
                x: 0,
                y: 0,
                width: 100,
                height: 100
            }
        );
    }

    #[test]
    fn odd_margins_round_down() {
        let resizer = Resizer::new(ResizeAlgorithm::Bilinear, (100, 50));
        // width: 201/2 - 50 = 50.5, height: 75/2 - 25 = 12.5
        assert_eq!(
            resizer.plan(201, 75),
            FitPlan::Crop {
                x: 50,
                y: 12,
                width: 100,
                height: 50
            }
        );
    }

    #[test]
    fn resize_stretches_to_exact_target() {
        let resizer = Resizer::new(ResizeAlgorithm::Bilinear, (64, 32));
        let (fitted, plan) = resizer.fit(&gradient(20, 40));

        assert!(matches!(plan, FitPlan::Resize { .. }));
        assert_eq!((fitted.width(), fitted.height()), (64, 32));
    }

    #[test]
    fn crop_copies_center_window() {
        let resizer = Resizer::new(ResizeAlgorithm::Bilinear, (100, 100));
        let (fitted, _) = resizer.fit(&gradient(200, 200));
        let fitted = fitted.to_rgb8();

        assert_eq!((fitted.width(), fitted.height()), (100, 100));
        assert_eq!(*fitted.get_pixel(0, 0), Rgb([50, 50, 7]));
        assert_eq!(*fitted.get_pixel(99, 99), Rgb([149, 149, 7]));
    }
}
