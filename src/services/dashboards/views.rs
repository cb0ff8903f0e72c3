//! 控制台视图的组装
//!
//! 纯函数，只负责把存储层取回的数据拼成响应结构。

use std::collections::{HashMap, HashSet};

use crate::models::{
    announcements::entities::Announcement,
    attendance::{
        entities::Attendance,
        responses::{AttendanceSheet, AttendanceSheetRow},
    },
    courses::entities::Course,
    dashboards::responses::{CatalogEntry, StudentCourseView, StudentLectureView, TeacherCourseView},
    enrollments::responses::EnrolledStudent,
    lectures::{entities::Lecture, responses::LectureWithCourse},
};

/// 课程已被删除时显示的名称
pub const UNKNOWN_COURSE: &str = "Unknown Course";

fn course_titles(courses: &[Course]) -> HashMap<i64, &str> {
    courses.iter().map(|c| (c.id, c.title.as_str())).collect()
}

fn title_or_unknown(titles: &HashMap<i64, &str>, course_id: i64) -> String {
    titles
        .get(&course_id)
        .copied()
        .unwrap_or(UNKNOWN_COURSE)
        .to_string()
}

pub fn catalog_entries(courses: Vec<Course>, enrolled: &HashSet<i64>) -> Vec<CatalogEntry> {
    courses
        .into_iter()
        .map(|course| CatalogEntry {
            enrolled: enrolled.contains(&course.id),
            course,
        })
        .collect()
}

/// 学生的课程：每门课带上课时（含本人出勤）与公告
///
/// `lectures` 按上课时间、`announcements` 按发布时间倒序传入，分组后保持原顺序。
pub fn student_courses(
    student_id: i64,
    courses: Vec<Course>,
    lectures: Vec<Lecture>,
    attendance: &[Attendance],
    announcements: Vec<Announcement>,
) -> Vec<StudentCourseView> {
    let attended: HashSet<i64> = attendance
        .iter()
        .filter(|record| record.is_present(student_id))
        .map(|record| record.lecture_id)
        .collect();

    let mut lectures_by_course: HashMap<i64, Vec<StudentLectureView>> = HashMap::new();
    for lecture in lectures {
        lectures_by_course
            .entry(lecture.course_id)
            .or_default()
            .push(StudentLectureView {
                attended: attended.contains(&lecture.id),
                lecture,
            });
    }

    let mut announcements_by_course: HashMap<i64, Vec<Announcement>> = HashMap::new();
    for announcement in announcements {
        announcements_by_course
            .entry(announcement.course_id)
            .or_default()
            .push(announcement);
    }

    courses
        .into_iter()
        .map(|course| StudentCourseView {
            lectures: lectures_by_course.remove(&course.id).unwrap_or_default(),
            announcements: announcements_by_course.remove(&course.id).unwrap_or_default(),
            course,
        })
        .collect()
}

pub fn teacher_courses(courses: Vec<Course>, counts: &HashMap<i64, i64>) -> Vec<TeacherCourseView> {
    courses
        .into_iter()
        .map(|course| TeacherCourseView {
            enrollment_count: counts.get(&course.id).copied().unwrap_or(0),
            course,
        })
        .collect()
}

pub fn lectures_with_titles(lectures: Vec<Lecture>, courses: &[Course]) -> Vec<LectureWithCourse> {
    let titles = course_titles(courses);
    lectures
        .into_iter()
        .map(|lecture| LectureWithCourse {
            course_title: title_or_unknown(&titles, lecture.course_id),
            lecture,
        })
        .collect()
}

/// 单个课时的考勤表，缺失的考勤记录视为无人出勤
pub fn attendance_sheet(
    lecture: Lecture,
    course_title: String,
    students: &[EnrolledStudent],
    attendance: Option<&Attendance>,
) -> AttendanceSheet {
    let students = students
        .iter()
        .map(|student| AttendanceSheetRow {
            user_id: student.user_id,
            name: student.name.clone(),
            present: attendance.is_some_and(|a| a.is_present(student.user_id)),
        })
        .collect();

    AttendanceSheet {
        lecture,
        course_title,
        students,
    }
}

/// 教师全部课时的考勤表
pub fn attendance_sheets(
    lectures: Vec<Lecture>,
    courses: &[Course],
    students_by_course: &HashMap<i64, Vec<EnrolledStudent>>,
    attendance: &[Attendance],
) -> Vec<AttendanceSheet> {
    let titles = course_titles(courses);
    let by_lecture: HashMap<i64, &Attendance> =
        attendance.iter().map(|a| (a.lecture_id, a)).collect();

    lectures
        .into_iter()
        .map(|lecture| {
            let title = title_or_unknown(&titles, lecture.course_id);
            let students = students_by_course
                .get(&lecture.course_id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let record = by_lecture.get(&lecture.id).copied();
            attendance_sheet(lecture, title, students, record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn course(id: i64, title: &str) -> Course {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        Course {
            id,
            title: title.to_string(),
            description: String::new(),
            category: "Programming".to_string(),
            teacher_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn lecture(id: i64, course_id: i64) -> Lecture {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        Lecture {
            id,
            course_id,
            teacher_id: 1,
            topic: format!("Lecture {id}"),
            scheduled_at: at,
            meeting_link: "https://meet.example.com/x".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    fn attendance(lecture_id: i64, attendees: Vec<i64>) -> Attendance {
        let now = Utc::now();
        Attendance {
            id: lecture_id,
            lecture_id,
            attendees,
            created_at: now,
            updated_at: now,
        }
    }

    fn student(user_id: i64, name: &str) -> EnrolledStudent {
        EnrolledStudent {
            user_id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            enrolled_at: Utc::now(),
        }
    }

    fn announcement(id: i64, course_id: i64) -> Announcement {
        Announcement {
            id,
            course_id,
            author_id: 1,
            text: format!("Note {id}"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_catalog_marks_enrolled() {
        let enrolled: HashSet<i64> = [2].into_iter().collect();
        let entries = catalog_entries(vec![course(1, "A"), course(2, "B")], &enrolled);
        assert!(!entries[0].enrolled);
        assert!(entries[1].enrolled);
    }

    #[test]
    fn test_student_courses_groups_and_marks_attendance() {
        let views = student_courses(
            7,
            vec![course(1, "A"), course(2, "B")],
            vec![lecture(10, 1), lecture(11, 1)],
            &[attendance(10, vec![3, 7]), attendance(11, vec![3])],
            vec![announcement(100, 1)],
        );

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].lectures.len(), 2);
        assert!(views[0].lectures[0].attended);
        assert!(!views[0].lectures[1].attended);
        assert_eq!(views[0].announcements.len(), 1);

        // 没有课时和公告的课程返回空列表
        assert!(views[1].lectures.is_empty());
        assert!(views[1].announcements.is_empty());
    }

    #[test]
    fn test_teacher_courses_default_zero_count() {
        let counts: HashMap<i64, i64> = [(1, 3)].into_iter().collect();
        let views = teacher_courses(vec![course(1, "A"), course(2, "B")], &counts);
        assert_eq!(views[0].enrollment_count, 3);
        assert_eq!(views[1].enrollment_count, 0);
    }

    #[test]
    fn test_unknown_course_fallback() {
        let items = lectures_with_titles(vec![lecture(10, 1), lecture(11, 99)], &[course(1, "A")]);
        assert_eq!(items[0].course_title, "A");
        assert_eq!(items[1].course_title, UNKNOWN_COURSE);
    }

    #[test]
    fn test_attendance_sheets() {
        let students: HashMap<i64, Vec<EnrolledStudent>> =
            [(1, vec![student(3, "Sam"), student(7, "Sue")])]
                .into_iter()
                .collect();

        let sheets = attendance_sheets(
            vec![lecture(10, 1), lecture(11, 1), lecture(12, 42)],
            &[course(1, "A")],
            &students,
            &[attendance(10, vec![7])],
        );

        assert_eq!(sheets.len(), 3);
        assert!(!sheets[0].students[0].present);
        assert!(sheets[0].students[1].present);
        // 缺失考勤记录：全员缺勤
        assert!(sheets[1].students.iter().all(|row| !row.present));
        // 课程已删除
        assert_eq!(sheets[2].course_title, UNKNOWN_COURSE);
        assert!(sheets[2].students.is_empty());
    }
}
