pub mod forces;
pub mod kinematics;
