pub mod keypoint_loader;
