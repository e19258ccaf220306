mod placeholder;
pub use placeholder::Placeholder;

mod pages;
pub use pages::{
    BatchManagement, BatchView, Dashboard, ManagerDashboard, MarketingStudentManagement,
    StudentManagement,
};

mod entries;
pub use entries::{Analytics, Batches, Home, Students};

mod login;
pub use login::Login;

mod setup;
pub use setup::Setup;
