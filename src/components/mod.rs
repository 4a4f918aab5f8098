mod home;
mod items;
mod nav;
mod orders;
mod payment;
mod ui;

pub use home::Home;
pub use items::{ItemGrid, ItemGridProps, ViewItems};
pub use nav::NavBar;
pub use orders::{MakeOrder, OrderFormView, OrderFormViewProps};
pub use payment::Payment;
pub use ui::{Button, Card, CardContent};
