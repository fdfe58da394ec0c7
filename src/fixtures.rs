//! Seed data for every collection, loaded when the daemon starts.
//!
//! Values mirror the site's mock content. Identifiers are intentionally
//! left empty here; the store assigns them on insert.

use crate::calc;
use crate::model::{
    Achievement, AchievementCategory, AcademicYearResult, GalleryCategory, GalleryItem,
    GalleryKind, ImageRef, StudentResult, SubjectMark, Teacher, Topper,
};

pub fn teachers() -> Vec<Teacher> {
    vec![
        Teacher {
            id: String::new(),
            name: "Dr. Sunita Verma".to_string(),
            subject: "Mathematics".to_string(),
            qualification: "M.Sc, Ph.D Mathematics".to_string(),
            experience: "15 Years".to_string(),
            specialization: "Advanced Calculus, Statistics".to_string(),
            achievements: vec![
                "Best Teacher Award 2023".to_string(),
                "Research Publication in Mathematics Journal".to_string(),
            ],
            email: "sunita.verma@tagorebalvidhya.edu".to_string(),
            phone: "+91 98765 43210".to_string(),
            image: ImageRef::url("/indian-female-teacher-professional.png"),
        },
        Teacher {
            id: String::new(),
            name: "Prof. Rajesh Kumar".to_string(),
            subject: "Physics".to_string(),
            qualification: "M.Sc Physics, B.Ed".to_string(),
            experience: "12 Years".to_string(),
            specialization: "Quantum Physics, Electronics".to_string(),
            achievements: vec![
                "Science Fair Judge".to_string(),
                "Physics Olympiad Mentor".to_string(),
            ],
            email: "rajesh.kumar@tagorebalvidhya.edu".to_string(),
            phone: "+91 98765 43211".to_string(),
            image: ImageRef::url("/indian-male-teacher-professional.png"),
        },
    ]
}

pub fn gallery_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: String::new(),
            kind: GalleryKind::Photo,
            category: GalleryCategory::Events,
            title: "Annual Sports Day 2024".to_string(),
            description: "Students participating in various sports activities and competitions"
                .to_string(),
            image: ImageRef::url("/school-sports-day-athletics.png"),
            video_url: None,
        },
        GalleryItem {
            id: String::new(),
            kind: GalleryKind::Video,
            category: GalleryCategory::Events,
            title: "Science Exhibition Highlights".to_string(),
            description:
                "Best moments from our annual science exhibition showcasing student innovations"
                    .to_string(),
            image: ImageRef::url("/science-lab-students.png"),
            video_url: Some("https://example.com/video1.mp4".to_string()),
        },
    ]
}

pub fn academic_results() -> Vec<AcademicYearResult> {
    vec![AcademicYearResult {
        id: String::new(),
        year: "2024".to_string(),
        pass_rate: "100%".to_string(),
        toppers: vec![Topper {
            name: "Arjun Sharma".to_string(),
            percentage: "98.5%".to_string(),
            stream: "Science".to_string(),
            rank: 1,
            image: ImageRef::url("/confident-indian-student.png"),
        }],
        highlights: vec![
            "15 students scored above 95%".to_string(),
            "State topper in Mathematics".to_string(),
        ],
    }]
}

pub fn achievements() -> Vec<Achievement> {
    vec![Achievement {
        id: String::new(),
        category: AchievementCategory::Sports,
        title: "Inter-School Cricket Championship".to_string(),
        year: "2024".to_string(),
        position: "Winners".to_string(),
        description: "Our cricket team won the district level championship".to_string(),
        student_name: None,
        student_class: None,
        image: ImageRef::url("/placeholder.svg"),
    }]
}

struct StudentSeed {
    name: &'static str,
    roll_number: &'static str,
    section: &'static str,
    stream: &'static str,
    father_name: &'static str,
    mother_name: &'static str,
    date_of_birth: &'static str,
    address: &'static str,
    phone: &'static str,
    email: &'static str,
    rank: &'static str,
    attendance: &'static str,
    remarks: &'static str,
    extracurricular: &'static [&'static str],
    subjects: &'static [(&'static str, u32)],
    image: &'static str,
}

fn build_student(seed: &StudentSeed) -> StudentResult {
    let subjects: Vec<SubjectMark> = seed
        .subjects
        .iter()
        .map(|(name, marks)| SubjectMark {
            name: (*name).to_string(),
            marks: *marks,
            max_marks: 100,
        })
        .collect();
    let summary = calc::summarize(&subjects);
    StudentResult {
        id: String::new(),
        student_name: seed.name.to_string(),
        roll_number: seed.roll_number.to_string(),
        class: "XII".to_string(),
        section: seed.section.to_string(),
        stream: seed.stream.to_string(),
        year: "2023-24".to_string(),
        exam_type: "Annual".to_string(),
        father_name: seed.father_name.to_string(),
        mother_name: seed.mother_name.to_string(),
        date_of_birth: seed.date_of_birth.to_string(),
        address: seed.address.to_string(),
        phone: seed.phone.to_string(),
        email: seed.email.to_string(),
        total_marks: summary.total_label(),
        percentage: summary.percentage_label(),
        subjects,
        grade: "A+".to_string(),
        rank: seed.rank.to_string(),
        attendance: seed.attendance.to_string(),
        extracurricular: seed.extracurricular.iter().map(|s| s.to_string()).collect(),
        remarks: seed.remarks.to_string(),
        image: ImageRef::url(seed.image),
    }
}

pub fn student_results() -> Vec<StudentResult> {
    [
        StudentSeed {
            name: "Arjun Sharma",
            roll_number: "2024001",
            section: "A",
            stream: "Science",
            father_name: "Rajesh Sharma",
            mother_name: "Sunita Sharma",
            date_of_birth: "15/03/2006",
            address: "123 Gandhi Nagar, Baran, Rajasthan",
            phone: "+91 9876543210",
            email: "arjun.sharma@student.tagore.edu",
            rank: "1",
            attendance: "98%",
            remarks: "Exceptional student with outstanding academic performance and leadership \
                      qualities. Shows great potential in scientific research.",
            extracurricular: &[
                "Science Club President",
                "Mathematics Society Member",
                "Debate Team Captain",
            ],
            subjects: &[
                ("Physics", 98),
                ("Chemistry", 99),
                ("Mathematics", 100),
                ("Biology", 97),
                ("English", 96),
            ],
            image: "https://via.placeholder.com/140?text=AS",
        },
        StudentSeed {
            name: "Priya Patel",
            roll_number: "2024002",
            section: "B",
            stream: "Commerce",
            father_name: "Amit Patel",
            mother_name: "Kavita Patel",
            date_of_birth: "22/08/2006",
            address: "456 Market Street, Baran, Rajasthan",
            phone: "+91 9876543211",
            email: "priya.patel@student.tagore.edu",
            rank: "2",
            attendance: "97%",
            remarks: "Brilliant student with excellent analytical skills and business acumen. \
                      Great leadership potential.",
            extracurricular: &[
                "Commerce Club Secretary",
                "Entrepreneurship Society",
                "Cultural Committee",
            ],
            subjects: &[
                ("Accountancy", 99),
                ("Business Studies", 98),
                ("Economics", 97),
                ("Mathematics", 98),
                ("English", 97),
            ],
            image: "https://via.placeholder.com/140?text=PP",
        },
        StudentSeed {
            name: "Rahul Kumar",
            roll_number: "2024003",
            section: "C",
            stream: "Arts",
            father_name: "Suresh Kumar",
            mother_name: "Meera Kumar",
            date_of_birth: "10/12/2005",
            address: "789 School Road, Baran, Rajasthan",
            phone: "+91 9876543212",
            email: "rahul.kumar@student.tagore.edu",
            rank: "3",
            attendance: "96%",
            remarks: "Outstanding student with deep understanding of humanities subjects. \
                      Excellent research and writing skills.",
            extracurricular: &[
                "History Society President",
                "Model UN Club",
                "Literary Society",
            ],
            subjects: &[
                ("History", 98),
                ("Political Science", 97),
                ("Geography", 96),
                ("Economics", 97),
                ("English", 97),
            ],
            image: "https://via.placeholder.com/140?text=RK",
        },
    ]
    .iter()
    .map(build_student)
    .collect()
}
