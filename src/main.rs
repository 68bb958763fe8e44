use anyhow::Context;
use clap::Parser;
use enroll_assist::config::Command;
use enroll_assist::utils::error::ErrorSeverity;
use enroll_assist::utils::{logger, validation::Validate};
use enroll_assist::{
    CliConfig, Course, CourseClient, CourseCreationRequest, CourseDraft, CourseServer, EnrollError,
    ServiceConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let result = match cli.command {
        Command::Serve { config, bind } => {
            let config = load_config(config.as_deref(), bind)?;
            logger::init_logger(cli.verbose, config.log_level(), config.logging.json);
            serve(config).await
        }
        Command::List { server } => {
            logger::init_cli_logger(cli.verbose);
            list(&server).await
        }
        Command::Get { id, server } => {
            logger::init_cli_logger(cli.verbose);
            get(id, &server).await
        }
        Command::Add {
            number,
            title,
            credits,
            level,
            server,
        } => {
            logger::init_cli_logger(cli.verbose);
            let draft = CourseDraft::new(&number, &title, credits, level);
            add(CourseCreationRequest::new(draft), &server).await
        }
    };

    if let Err(e) = result {
        report_and_exit(e);
    }
    Ok(())
}

fn load_config(path: Option<&str>, bind: Option<String>) -> anyhow::Result<ServiceConfig> {
    let mut config = match path {
        Some(path) => ServiceConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => ServiceConfig::default(),
    };

    // 命令列覆蓋設定
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }
    Ok(config)
}

async fn serve(config: ServiceConfig) -> enroll_assist::Result<()> {
    tracing::info!("Starting enroll-assist service");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e);
    }

    CourseServer::from_config(&config).await?.run().await
}

async fn list(server: &str) -> enroll_assist::Result<()> {
    let courses = CourseClient::new(server)?.list_courses().await?;
    if courses.is_empty() {
        println!("No courses registered");
    }
    for course in &courses {
        print_course(course);
    }
    Ok(())
}

async fn get(id: u64, server: &str) -> enroll_assist::Result<()> {
    let course = CourseClient::new(server)?.get_course(id).await?;
    print_course(&course);
    Ok(())
}

async fn add(request: CourseCreationRequest, server: &str) -> enroll_assist::Result<()> {
    let course = CourseClient::new(server)?.add_course(&request).await?;
    println!("✅ Course registered");
    print_course(&course);
    Ok(())
}

fn print_course(course: &Course) {
    println!(
        "#{:<4} {}  {:<40} {} credit(s)  {}",
        course.course_id,
        course.course_number,
        course.course_title,
        course.course_credits,
        course.graduate_level
    );
}

fn report_and_exit(e: EnrollError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
