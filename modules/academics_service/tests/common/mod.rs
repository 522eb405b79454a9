//! Common test utilities and the shared campus fixture

use academics_service::contract::{AcademicsError, NewFaculty, Principal};
use academics_service::domain::Service;

/// Password seeded for the registrar account
pub const ADMIN_PASSWORD: &str = "registrar-secret";
/// Password shared by every seeded faculty account
pub const FACULTY_PASSWORD: &str = "chalk-and-talk";

/// Two-department campus seeded through the service itself
///
/// Computer Science carries a full teaching setup: Prof. Rao heads the
/// department and Prof. Iyer teaches CS101 inside the B.Tech programme.
/// Mechanical Engineering (Prof. Menon, ME101) exists to exercise
/// cross-department boundaries.
#[derive(Debug, Clone)]
pub struct TestCampus {
    /// Session principal for the seeded super admin
    pub admin: Principal,
    pub computer_science: i32,
    pub mechanical: i32,
    /// Heads Computer Science
    pub prof_rao: i32,
    /// Computer Science faculty, assigned to CS101
    pub prof_iyer: i32,
    /// Mechanical Engineering faculty, no teaching assignments
    pub prof_menon: i32,
    pub btech_cse: i32,
    pub cs101: i32,
    pub cs201: i32,
    pub me101: i32,
}

impl TestCampus {
    /// Seed the campus through service calls, capturing the assigned ids
    pub async fn seed(service: &Service) -> Result<Self, AcademicsError> {
        let admin_row = service
            .seed_super_admin("registrar@campus.edu", ADMIN_PASSWORD)
            .await?;
        let admin = Principal::super_admin(admin_row.id);
        let session = Some(admin);

        let cs = service
            .create_department(session, "Computer Science")
            .await?;
        let mech = service
            .create_department(session, "Mechanical Engineering")
            .await?;

        let rao = service
            .create_faculty(
                session,
                NewFaculty {
                    name: "Prof. Rao".to_string(),
                    email: "rao@campus.edu".to_string(),
                    password: FACULTY_PASSWORD.to_string(),
                    department_id: cs.id,
                },
            )
            .await?;
        let iyer = service
            .create_faculty(
                session,
                NewFaculty {
                    name: "Prof. Iyer".to_string(),
                    email: "iyer@campus.edu".to_string(),
                    password: FACULTY_PASSWORD.to_string(),
                    department_id: cs.id,
                },
            )
            .await?;
        let menon = service
            .create_faculty(
                session,
                NewFaculty {
                    name: "Prof. Menon".to_string(),
                    email: "menon@campus.edu".to_string(),
                    password: FACULTY_PASSWORD.to_string(),
                    department_id: mech.id,
                },
            )
            .await?;

        service.assign_hod(session, cs.id, rao.id).await?;

        let btech = service
            .create_programme(session, "B.Tech Computer Science", cs.id)
            .await?;
        let cs101 = service
            .create_course(session, "CS101", "Data Structures", cs.id)
            .await?;
        let cs201 = service
            .create_course(session, "CS201", "Operating Systems", cs.id)
            .await?;
        let me101 = service
            .create_course(session, "ME101", "Engineering Mechanics", mech.id)
            .await?;

        service
            .assign_course(session, btech.id, cs101.id, 3, iyer.id)
            .await?;

        Ok(Self {
            admin,
            computer_science: cs.id,
            mechanical: mech.id,
            prof_rao: rao.id,
            prof_iyer: iyer.id,
            prof_menon: menon.id,
            btech_cse: btech.id,
            cs101: cs101.id,
            cs201: cs201.id,
            me101: me101.id,
        })
    }

    /// Session for a seeded faculty member
    pub fn faculty_session(&self, faculty_id: i32) -> Option<Principal> {
        Some(Principal::faculty(faculty_id))
    }

    /// Session for the seeded super admin
    pub fn admin_session(&self) -> Option<Principal> {
        Some(self.admin)
    }

    /// Print the campus structure
    pub fn print_structure(&self) {
        println!("\n📊 Campus Structure:");
        println!(
            "   ├─ Computer Science (department {})",
            self.computer_science
        );
        println!("   │  ├─ Prof. Rao (faculty {}) [head]", self.prof_rao);
        println!(
            "   │  ├─ Prof. Iyer (faculty {}) teaches CS101",
            self.prof_iyer
        );
        println!(
            "   │  ├─ B.Tech Computer Science (programme {})",
            self.btech_cse
        );
        println!("   │  ├─ CS101 Data Structures (course {})", self.cs101);
        println!("   │  └─ CS201 Operating Systems (course {})", self.cs201);
        println!("   └─ Mechanical Engineering (department {})", self.mechanical);
        println!("      ├─ Prof. Menon (faculty {})", self.prof_menon);
        println!("      └─ ME101 Engineering Mechanics (course {})", self.me101);
    }
}
