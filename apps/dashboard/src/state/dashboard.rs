//! # Role Queue States
//!
//! In-memory queues for the back-office dashboards, each loaded once from
//! its fixture at startup and mutated only in memory.
//!
//! Each role's records are its OWN copies: the vendor marking an order
//! shipped changes nothing in the customer's order history, and vice
//! versa. Cross-role consistency is explicitly out of scope for the demo.

use std::sync::{Arc, Mutex};

use bazaar_core::{
    DeliveryAssignment, FlaggedProduct, ReviewSubmission, User, VendorApplication, VendorOrder,
};

/// Admin dashboard data: the user table and the vendor-application queue.
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    users: Arc<Mutex<Vec<User>>>,
    applications: Arc<Mutex<Vec<VendorApplication>>>,
}

impl AdminState {
    pub fn new(users: Vec<User>, applications: Vec<VendorApplication>) -> Self {
        AdminState {
            users: Arc::new(Mutex::new(users)),
            applications: Arc::new(Mutex::new(applications)),
        }
    }

    pub fn with_users<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[User]) -> R,
    {
        let users = self.users.lock().expect("Users mutex poisoned");
        f(&users)
    }

    pub fn with_users_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<User>) -> R,
    {
        let mut users = self.users.lock().expect("Users mutex poisoned");
        f(&mut users)
    }

    pub fn with_applications<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[VendorApplication]) -> R,
    {
        let apps = self.applications.lock().expect("Applications mutex poisoned");
        f(&apps)
    }

    pub fn with_applications_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<VendorApplication>) -> R,
    {
        let mut apps = self.applications.lock().expect("Applications mutex poisoned");
        f(&mut apps)
    }
}

/// Vendor dashboard data: the vendor's own copies of incoming orders.
#[derive(Debug, Clone, Default)]
pub struct VendorState {
    orders: Arc<Mutex<Vec<VendorOrder>>>,
}

impl VendorState {
    pub fn new(orders: Vec<VendorOrder>) -> Self {
        VendorState {
            orders: Arc::new(Mutex::new(orders)),
        }
    }

    pub fn with_orders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[VendorOrder]) -> R,
    {
        let orders = self.orders.lock().expect("Vendor orders mutex poisoned");
        f(&orders)
    }

    pub fn with_orders_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<VendorOrder>) -> R,
    {
        let mut orders = self.orders.lock().expect("Vendor orders mutex poisoned");
        f(&mut orders)
    }
}

/// Moderator dashboard data: review queue + flagged-product queue.
#[derive(Debug, Clone, Default)]
pub struct ModeratorState {
    reviews: Arc<Mutex<Vec<ReviewSubmission>>>,
    flags: Arc<Mutex<Vec<FlaggedProduct>>>,
}

impl ModeratorState {
    pub fn new(reviews: Vec<ReviewSubmission>, flags: Vec<FlaggedProduct>) -> Self {
        ModeratorState {
            reviews: Arc::new(Mutex::new(reviews)),
            flags: Arc::new(Mutex::new(flags)),
        }
    }

    pub fn with_reviews<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[ReviewSubmission]) -> R,
    {
        let reviews = self.reviews.lock().expect("Reviews mutex poisoned");
        f(&reviews)
    }

    pub fn with_reviews_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<ReviewSubmission>) -> R,
    {
        let mut reviews = self.reviews.lock().expect("Reviews mutex poisoned");
        f(&mut reviews)
    }

    pub fn with_flags<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[FlaggedProduct]) -> R,
    {
        let flags = self.flags.lock().expect("Flags mutex poisoned");
        f(&flags)
    }

    pub fn with_flags_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<FlaggedProduct>) -> R,
    {
        let mut flags = self.flags.lock().expect("Flags mutex poisoned");
        f(&mut flags)
    }
}

/// Delivery-agent dashboard data: the agent's assignments.
#[derive(Debug, Clone, Default)]
pub struct DeliveryState {
    assignments: Arc<Mutex<Vec<DeliveryAssignment>>>,
}

impl DeliveryState {
    pub fn new(assignments: Vec<DeliveryAssignment>) -> Self {
        DeliveryState {
            assignments: Arc::new(Mutex::new(assignments)),
        }
    }

    pub fn with_assignments<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[DeliveryAssignment]) -> R,
    {
        let assignments = self.assignments.lock().expect("Assignments mutex poisoned");
        f(&assignments)
    }

    pub fn with_assignments_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<DeliveryAssignment>) -> R,
    {
        let mut assignments = self.assignments.lock().expect("Assignments mutex poisoned");
        f(&mut assignments)
    }
}
