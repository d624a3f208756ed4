use chrono::{Duration, Local, NaiveDate};
use clap::Args;

use placements::db;
use placements::error::AppError;
use placements::portal::{
    FinalResult, InterviewResult, InterviewSchedule, JobApplication, NewCompany, NewJobPosting,
    NewOfficer, NewStudent, OfficerDesk, OfficerLogin, PlacementStore, PlacementUpdate,
    StudentLogin, StudentPortal,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Interview date for the drive (YYYY-MM-DD). Defaults to a week from today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) interview_date: Option<NaiveDate>,
    /// Stop after the interview rounds, before any placement decision.
    #[arg(long)]
    pub(crate) skip_placement: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let interview_date = args
        .interview_date
        .unwrap_or_else(|| Local::now().date_naive() + Duration::days(7));

    println!("Placement drive demo (in-memory database)");

    let pool = db::connect_in_memory().await?;
    let store = PlacementStore::new(pool);
    let portal = StudentPortal::new(store.clone());
    let desk = OfficerDesk::new(store.clone());

    // Enrollment happens outside the portal; the demo seeds the roster and
    // the officer account directly.
    let ananya = store
        .insert_student(&NewStudent {
            first_name: "Ananya".to_string(),
            last_name: Some("Sharma".to_string()),
            email: Some("ananya@college.example".to_string()),
            phone: Some("9876501234".to_string()),
            cgpa: Some(8.4),
        })
        .await?;
    let rohan = store
        .insert_student(&NewStudent {
            first_name: "Rohan".to_string(),
            last_name: Some("Patil".to_string()),
            email: Some("rohan@college.example".to_string()),
            phone: Some("9876505678".to_string()),
            cgpa: Some(6.1),
        })
        .await?;
    store
        .insert_officer(&NewOfficer {
            email: "tpo@college.example".to_string(),
            password: "placement@123".to_string(),
            officer_name: Some("Prof. Menon".to_string()),
        })
        .await?;

    let officer = desk
        .login(&OfficerLogin {
            email: "tpo@college.example".to_string(),
            password: "placement@123".to_string(),
        })
        .await?;
    println!(
        "- Officer signed in: {}",
        officer.officer_name.as_deref().unwrap_or(&officer.email)
    );

    let company = desk
        .add_company(&NewCompany {
            company_name: "Brightstack Software".to_string(),
            company_type: Some("Private".to_string()),
            phone: Some("080-4455-9900".to_string()),
            industry_type: Some("IT Services".to_string()),
            email: Some("campus@brightstack.example".to_string()),
            website: Some("https://brightstack.example".to_string()),
            address: Some("12 Residency Road, Bengaluru".to_string()),
        })
        .await?;
    println!("- Registered {}", company.company_name);

    let job = desk
        .post_job(&NewJobPosting {
            company_id: company.company_id,
            job_title: "Graduate Software Engineer".to_string(),
            job_description: Some("Backend work on the billing platform.".to_string()),
            salary_package: 8.5,
            location: Some("Bengaluru".to_string()),
            minimum_cgpa: 7.5,
            application_deadline: interview_date - Duration::days(3),
            number_of_positions: 4,
        })
        .await?;
    println!(
        "- Posted {} (package {} LPA, CGPA floor {})",
        job.job_title,
        job.salary_package.unwrap_or_default(),
        job.minimum_cgpa.unwrap_or_default()
    );

    println!("\nJob board by student");
    for seeded in [&ananya, &rohan] {
        let me = portal
            .login(&StudentLogin {
                student_id: seeded.student_id,
                first_name: seeded.first_name.clone(),
                phone: seeded.phone.clone().unwrap_or_default(),
            })
            .await?;
        let board = portal.job_board(me.student_id).await?;
        for opening in &board {
            println!(
                "- {} sees {} at {}: {}",
                me.first_name,
                opening.job_title,
                opening.company_name,
                if opening.eligible {
                    "eligible"
                } else {
                    "below the floor"
                }
            );
        }
    }

    let receipt = portal
        .apply(
            ananya.student_id,
            &JobApplication {
                job_id: job.job_id,
                cover_letter: None,
            },
        )
        .await?;
    println!(
        "\n- {} applied; application #{} is \"{}\"",
        ananya.first_name,
        receipt.application.application_id,
        receipt.application.application_status
    );

    let shortfall = portal
        .apply(
            rohan.student_id,
            &JobApplication {
                job_id: job.job_id,
                cover_letter: Some("Open to relocation.".to_string()),
            },
        )
        .await?;
    println!(
        "- {} applied below the floor; application #{} is \"{}\"",
        rohan.first_name,
        shortfall.application.application_id,
        shortfall.application.application_status
    );
    if let Some(warning) = &shortfall.warning {
        println!("  warning: {warning}");
    }

    let interview = desk
        .schedule_interview(&InterviewSchedule {
            application_id: receipt.application.application_id,
            interview_date,
            interview_round: "Technical Round 1".to_string(),
            result: InterviewResult::Pending,
        })
        .await?;
    println!(
        "\n- Scheduled {} for {}; the application moved to \"Interview Scheduled\"",
        interview.interview_round.as_deref().unwrap_or("a round"),
        interview.interview_date
    );

    let updated = desk
        .update_interview_result(interview.interview_id, InterviewResult::Selected)
        .await?;
    println!(
        "- Round result \"{}\" copied onto the application verbatim",
        updated.result
    );

    let applications = portal.applications(ananya.student_id).await?;
    if let Some(latest) = applications.first() {
        println!(
            "  {} now sees {}: \"{}\"",
            ananya.first_name, latest.job_title, latest.application_status
        );
    }

    if args.skip_placement {
        println!("\nSkipping the placement decision (--skip-placement)");
        return Ok(());
    }

    let outcome = desk
        .record_placement(
            ananya.student_id,
            &PlacementUpdate {
                interview_id: interview.interview_id,
                result: FinalResult::Placed,
            },
        )
        .await?;
    println!(
        "\n- Final decision recorded: interview \"{}\", application \"{}\", roster \"{}\"",
        outcome.interview_result, outcome.application_status, outcome.placement_status
    );

    let digest = portal.interviews(ananya.student_id).await?;
    println!("  Dashboard banner: {}", digest.message);
    match serde_json::to_string_pretty(&digest) {
        Ok(json) => println!("  Interview digest payload:\n{json}"),
        Err(err) => println!("  Interview digest payload unavailable: {err}"),
    }

    println!("\nFinal roster");
    for student in desk.students().await? {
        println!(
            "- #{} {} {} | CGPA {} | {}",
            student.student_id,
            student.first_name,
            student.last_name.as_deref().unwrap_or(""),
            student
                .cgpa
                .map(|cgpa| cgpa.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            student
                .placement_status
                .as_deref()
                .unwrap_or("no decision yet")
        );
    }

    Ok(())
}
