// Reply templates. Placeholders use `{name}` and are filled by `render`.
// `{base_url}`, `{phone_primary}` and `{phone_secondary}` are always available
// through `KnowledgeBase::render`.

/// Replaces every `{key}` with its value. Unknown placeholders are left as is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("{{{key}}}");
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, value);
        }
    }
    out
}

pub const CONTACT_FOOTER: &str = "**📞 Need Help?** Call {phone_primary} | {phone_secondary}";

pub const GREETING: &str = r#"👋 **Welcome to CareerGenAI - Your Intelligent Career Partner!**

I'm your AI assistant, ready to help with:
🎓 **Academic Guidance** - College recommendations based on your marks
🛠️ **All Services** - Resume building, career assessment, counselling
💙 **Emotional Support** - When you're confused or stressed about your future
📞 **Expert Connect** - Direct access to human counselors

**💡 Try asking me:**
• "I got 85% which college should I go?"
• "I need help with resume building"
• "What services do you offer?"
• "I'm confused about my career"

How can I help you today?"#;

pub const PRICING_OVERVIEW: &str = r#"💰 **CareerGenAI Pricing - Transparent & Student-Friendly**

**🆓 FREE Services (8 total) - No Hidden Charges:**
✅ Career Assessment - AI-powered career matching
✅ Personality Quiz - Work style analysis
✅ Resume Builder - Professional ATS templates
✅ Career Counselling - Expert guidance sessions
✅ Profile Builder - Complete career tracking
✅ College Search - 10,000+ colleges database
✅ Career Comparison - Side-by-side analysis
✅ AI Chatbot - 24/7 intelligent support (that's me!)

**💎 Premium Services (2 total):**
🥉 **1 Month Plan** - ₹1,999
• Career Roadmaps - Step-by-step career guides
• Premium Resume Builder - AI-powered features
• Priority support

🥈 **3 Months Plan** - ₹2,999 (Most Popular - Save ₹1,998!)
• All premium features
• Extended support period
• Multiple career roadmaps

🥇 **1 Year Plan** - ₹3,999 (Best Value - Save ₹3,997!)
• Unlimited access to all features
• Personal mentor support
• Continuous updates

**🎁 BONUS: FREE Admission Counselling**
• Engineering (JEE, BITSAT, State CETs)
• Medical (NEET, AIIMS, JIPMER)
• Management (CAT, XAT, GMAT)
• No registration required!

**🔗 Get Started:** {base_url}/register

**📞 Questions?** Call {phone_primary} | {phone_secondary}

**💡 Recommendation:** Start with our 8 FREE services, upgrade only if you need advanced roadmaps!"#;

pub const CONTACT: &str = r#"📞 **CareerGenAI Contact & Support Information**

**🔥 Immediate Support:**
• **Primary Phone:** {phone_primary}
• **Secondary Phone:** {phone_secondary}
• **Response Time:** Within 2 hours during business hours

**🕐 Support Hours:**
• **Mon-Sat:** 9:00 AM - 8:00 PM
• **Sunday:** 10:00 AM - 6:00 PM
• **AI Chatbot:** 24/7 (that's me!)

**🎯 What Our Support Team Helps With:**
• **Academic Guidance** - College selection, entrance exam strategy
• **Career Counselling** - Personalized career planning sessions
• **Technical Support** - Platform usage, account issues
• **Admission Counselling** - FREE guidance for JEE, NEET, CAT
• **Emotional Support** - When you're confused or stressed

**💬 Multiple Ways to Reach Us:**
• **Phone Calls** - Direct conversation with experts
• **AI Chat** - Instant responses anytime (ask me anything!)
• **Service Platform** - Book counselling sessions online at {base_url}/consult

**🆓 FREE Consultation Available:**
No registration required - just call and get immediate expert guidance!

**📱 Save Our Numbers:** {phone_primary} | {phone_secondary}

How can I connect you with the right support today?"#;

pub const WEBSITE_INFO: &str = r#"🌟 **About CareerGenAI - Your Intelligent Career Partner**

**🎯 Our Mission:**
Making career guidance accessible to every student through AI-powered tools and expert support.

**👥 Our Team:**
• Career guidance experts with 10+ years experience
• AI specialists and data scientists
• Certified counselors and psychologists
• Student success advocates

**🏆 What Makes Us Different:**
• **AI-Powered Intelligence** - Advanced algorithms for personalized guidance
• **Comprehensive Platform** - 10 services covering all career needs
• **Expert Support** - Human counselors for complex decisions
• **Emotional Intelligence** - Understanding student stress and anxiety
• **Accessibility** - 8 FREE services, no barriers to guidance

**🎓 Services Coverage:**
• **Academic Guidance** - College recommendations, entrance prep
• **Career Discovery** - Assessments, personality analysis
• **Professional Tools** - Resume building, profile creation
• **Expert Support** - Counselling, mentorship, guidance

**📞 Connect With Us:**
• Phone: {phone_primary} | {phone_secondary}
• Hours: Mon-Sat (9 AM - 8 PM), Sun (10 AM - 6 PM)
• Chat: 24/7 AI assistant (that's me!)

**🚀 Founded in 2024** with a vision to democratize career guidance through technology and human expertise.

Ready to start your career journey with us?"#;

/// Shown when a service query names no resolvable service.
pub const SERVICE_CATALOG: &str = r#"🛠️ **CareerGenAI Services - Complete Overview**

**🆓 FREE Services (8 total):**
1️⃣ **Career Assessment** - AI-powered career matching ({base_url}/interest-form)
2️⃣ **Personality Quiz** - Work style analysis ({base_url}/careerQuiz)
3️⃣ **Resume Builder** - Professional ATS templates ({base_url}/resume-templates)
4️⃣ **Career Counselling** - Expert guidance sessions ({base_url}/consult)
5️⃣ **Profile Builder** - Complete career tracking ({base_url}/profile-builder)
6️⃣ **Top Colleges** - 10,000+ colleges database ({base_url}/college)
7️⃣ **Career Comparison** - Side-by-side analysis ({base_url}/compare)
8️⃣ **AI Chatbot** - 24/7 intelligent support (that's me!)

**💎 PREMIUM Services (2 total):**
9️⃣ **Career Roadmaps** - Step-by-step career guides ({base_url}/careerDetail)
🔟 **Premium Resume Builder** - AI-powered features ({base_url}/AllComponents)

**💰 Premium Pricing:** ₹1,999 (1M) | ₹2,999 (3M) | ₹3,999 (1Y)

**📞 Support:** {phone_primary} | {phone_secondary}

Which specific service interests you most?"#;

pub const SERVICES_OVERVIEW: &str = r#"🎯 **CAREERGENAI - COMPLETE SERVICE PORTFOLIO**

**🆓 FREE SERVICES (8 Total) - Registration Required, No Money:**
1. **Career Assessment** - AI-powered career discovery based on your interests
2. **Personality Quiz** - Discover your personality type and matching careers
3. **AI Chatbot** - 24/7 intelligent career assistant (that's me! 🤖)
4. **Career Counselling** - One-on-one sessions with certified experts
5. **Profile Builder** - Create your comprehensive student career profile
6. **Top Colleges Search** - Explore 10,000+ colleges with smart filters
7. **Career Comparison Tool** - Compare salaries, skills, and growth prospects
8. **Resume Builder** - ATS-friendly professional resume templates

**💎 PREMIUM SERVICES (2 Total) - Paid Subscription:**
9. **Career Roadmaps** - Step-by-step guides for your dream career
10. **Premium Resume Builder** - AI-powered templates with advanced features

**🎁 BONUS:** FREE Admission Counselling for Engineering/MBBS/MBA/Medical courses (No registration required!)

**Real Person Counselling:** Yes! Our career counselling connects you with certified human experts for personalized guidance.

**🔗 Quick Access Links:**
- Career Assessment: {base_url}/interest-form
- Personality Quiz: {base_url}/careerQuiz
- Resume Builder (FREE): {base_url}/resume-templates
- Premium Resume Builder: {base_url}/AllComponents
- College Search: {base_url}/college
- Expert Counselling: {base_url}/consult
- Career Comparison: {base_url}/compare
- Profile Builder: {base_url}/profile-builder
- Career Details: {base_url}/careerDetail

Ready to explore? Which service interests you most?"#;

pub const PRICING_DETAILS: &str = r#"💰 **CAREERGENAI PRICING - TRANSPARENT & AFFORDABLE**

**🆓 FREE SERVICES (Registration Required, No Money):**
✅ Career Assessment - AI career discovery
✅ Personality Quiz - Know your work style
✅ AI Chatbot - 24/7 career assistant
✅ Career Counselling - Expert consultations
✅ Profile Builder - Student career profiles
✅ Top Colleges Search - 10,000+ colleges
✅ Career Comparison - Compare career paths
✅ Resume Builder - Professional templates
✅ **FREE Admission Counselling** - Engineering/MBBS/MBA guidance (No registration needed!)

**💎 PREMIUM PLANS (Only 2 Features):**
🥉 **1 Month** - ₹1,999
🥈 **3 Months** - ₹2,999 (MOST POPULAR - Save 33%)
🥇 **1 Year** - ₹3,999 (BEST VALUE - Save 83%)

**Premium Features:**
- Career Roadmaps (downloadable step-by-step guides)
- Premium Resume Builder (6+ AI-powered templates)

**🔗 Get Started:**
- Register Free: {base_url}/register
- View Pricing: {base_url}/pricing

**Payment:** Secure payments • Cancel anytime • No hidden charges

80% of our features are FREE forever (just register)! Need more details about any plan?"#;

pub const PROCESS_GUIDE: &str = r#"🚀 **HOW TO GET STARTED - STEP-BY-STEP GUIDE**

**📝 FREE Registration Process (2 Minutes, No Payment):**
1. Visit: {base_url}/register
2. Fill: Name, Email, Mobile, Password
3. Receive 6-digit OTP via email
4. Enter OTP for instant verification
5. **Account activated!** Access all 8 FREE services immediately (no money required)

**🎯 Using Career Assessment (FREE after registration):**
1. Login → Visit: {base_url}/interest-form
2. Select from 18 interest areas (Mathematics, Design, Technology, etc.)
3. AI analyzes your choices in real-time
4. Get top 5 career matches with detailed insights
5. Download your personalized career report

**👨‍💼 Booking Career Counselling (FREE after registration):**
1. Visit: {base_url}/consult
2. Choose available time slot
3. Provide your academic background
4. Connect with certified career expert
5. Get personalized guidance (30-60 minutes)

**🏛️ College Search Process (FREE after registration):**
1. Visit: {base_url}/college
2. Enter: Percentile + Course + Location
3. Get filtered results based on eligibility
4. Compare colleges, fees, placements
5. Save favorites and get admission guidance

**📄 Resume Builder (FREE after registration):**
1. Visit: {base_url}/resume-templates
2. Choose from professional templates
3. Fill in your details
4. Download ATS-friendly PDF

**🆓 FREE Admission Counselling (No registration required!):**
- Visit: {base_url} and click **'Book Now'**
- Available for Engineering/MBBS/MBA/Medical
- Direct expert consultation at zero cost

**🔗 Quick Start Links:**
- Register: {base_url}/register
- Login: {base_url}/login

Need help with any specific step?"#;

pub const ABOUT_US: &str = r#"🌟 **ABOUT CAREERGENAI - YOUR AI-POWERED CAREER COMPANION**

**🎯 What is CareerGenAI?**
CareerGenAI is India's leading AI-powered career guidance platform that makes professional career counselling accessible to every student through intelligent technology and expert support.

**👥 Who is this for?**
- **Students (Class 10-12)** - Career exploration and stream selection
- **College Students** - Specialization and skill development guidance
- **Working Professionals** - Career transitions and upskilling
- **Parents** - Understanding career options for their children
- **Career Changers** - Exploring new professional paths

**🇮🇳 Geographic Coverage:**
- **Primary Focus:** Indian students and education system
- **Global Reach:** International career guidance available
- **Company Base:** India (serving students nationwide)

**🎯 Our Mission:**
"Making intelligent career guidance accessible to every student through AI-powered tools and expert human support"

**🔮 Our Vision:**
"To be the leading platform where technology meets human expertise for career success"

**💡 What Makes Us Different:**
- **AI + Human Expertise:** Best of both worlds
- **Comprehensive Platform:** 10 services under one roof
- **Accessibility:** 8 services completely FREE
- **Real Experts:** Certified career counsellors

Ready to start your career journey with us?"#;

pub const CONTACT_SUPPORT: &str = r#"📞 **CAREERGENAI SUPPORT & CONTACT INFORMATION**

**📱 Primary Contact Numbers:**
- **Main Support:** {phone_primary}
- **Secondary:** {phone_secondary}
- **WhatsApp:** Available on both numbers
- **Website:** {base_url}

**🕒 Working Hours:**
- **Monday-Saturday:** 9:00 AM - 8:00 PM
- **Sunday:** 10:00 AM - 6:00 PM
- **AI Chatbot:** 24/7 availability (that's me! 🤖)

**⚡ Response Time:**
- **Phone Calls:** Immediate during working hours
- **WhatsApp Messages:** Within 2-4 hours
- **Email Queries:** Within 24 hours

**🔧 Common Issues We Help With:**
- "I can't register my account" - Visit: {base_url}/register
- "Payment not processing" - Call: {phone_primary}
- "Can't access career assessment" - Login at: {base_url}/login
- "Want to talk to a real counsellor" - Book at: {base_url}/consult

**🔗 Quick Support Links:**
- Contact Form: {base_url}/contact
- Book Counselling: {base_url}/consult

What specific help do you need today?"#;

pub const RESUME_GUIDE: &str = r#"📄 **How to Build a Professional Resume - Step by Step**

**🎯 Using Our FREE Resume Builder:**

**Step 1: Choose Template**
• Visit {base_url}/resume-templates
• Select from Modern, Classic, Creative, or Professional templates
• All templates are ATS-friendly

**Step 2: Fill Your Information**
• Personal details and contact info
• Professional summary (2-3 lines)
• Work experience (if any)
• Education details
• Skills and certifications

**Step 3: Customize Design**
• Adjust colors and fonts
• Rearrange sections as needed
• Preview your resume

**Step 4: Download & Apply**
• Download as PDF
• Tailor for each job application
• Include relevant keywords

**💡 Pro Tips:**
• Keep it to 1-2 pages maximum
• Use action verbs (achieved, managed, developed)
• Quantify achievements with numbers

**🔗 Start Building:** {base_url}/resume-templates
**📞 Need Help?** Call {phone_primary}"#;

pub const ASSESSMENT_GUIDE: &str = r#"🎯 **How to Take Career Assessment - Complete Guide**

**🧠 Our AI-Powered Career Discovery Process:**

**Step 1: Access Assessment**
• Visit {base_url}/interest-form
• Takes 15-20 minutes

**Step 2: Answer Questions**
• 18+ career interest areas
• Rate your preferences honestly
• Include skills and subjects you enjoy

**Step 3: AI Analysis**
• Our AI analyzes your responses
• Matches with 500+ career options
• Considers market trends and growth

**Step 4: Get Results**
• Top 5 career matches
• Detailed career descriptions
• Required skills and education
• Salary expectations and growth prospects

**Step 5: Take Action**
• Explore recommended careers
• Use our college search tool
• Book expert counselling session

**🔗 Start Assessment:** {base_url}/interest-form
**📞 Expert Guidance:** {phone_primary}"#;

pub const PLATFORM_GUIDE: &str = r#"🔍 **How to Use CareerGenAI Platform - Complete Guide**

**🚀 Getting Started:**

**Step 1: Explore Services**
• 8 FREE services available
• 2 Premium services for advanced features

**Step 2: Take Assessments**
• Career Assessment - Find your ideal career
• Personality Quiz - Understand your work style
• Both are completely FREE

**Step 3: Build Your Profile**
• Use Profile Builder to track progress
• Create professional resume
• Search and compare colleges

**Step 4: Get Expert Help**
• Book FREE counselling sessions
• Call direct support lines
• Access 24/7 AI chatbot (that's me!)

**Step 5: Plan Your Future**
• Use career roadmaps (Premium)
• Compare different career options
• Get admission counselling

**🆓 FREE Services:** Career Assessment, Resume Builder, College Search, Expert Counselling
**💎 Premium:** Advanced roadmaps and premium resume builder

**📞 Support:** {phone_primary} | {phone_secondary}
**💬 Chat:** Available 24/7 for instant help"#;

pub const FREE_VS_PREMIUM: &str = r#"⚖️ **FREE vs PREMIUM Services Comparison**

**🆓 FREE Services (8 total):**
✅ **Career Assessment** - AI-powered career matching
✅ **Personality Quiz** - Work style analysis
✅ **Resume Builder** - Professional ATS templates
✅ **Career Counselling** - Expert guidance sessions
✅ **Profile Builder** - Complete career profile
✅ **Top Colleges** - 10,000+ college database
✅ **Career Comparison** - Side-by-side analysis
✅ **AI Chatbot** - 24/7 intelligent support

**💎 PREMIUM Services (2 total):**
✅ **Career Roadmaps** - Step-by-step career guides
✅ **Premium Resume Builder** - AI-powered with advanced features

**💰 Premium Pricing:**
• 1 Month: ₹1,999
• 3 Months: ₹2,999 (Most Popular)
• 1 Year: ₹3,999 (Best Value)

**🎯 Who Should Choose Premium:**
• Students wanting detailed career roadmaps
• Job seekers needing advanced resume features
• Those requiring priority support

**💡 Recommendation:** Start with FREE services, upgrade if you need advanced features!"#;

pub const ENGINEERING_VS_MEDICAL: &str = r#"⚖️ **Engineering vs Medical - Detailed Comparison**

**🔧 ENGINEERING:**
• **Duration:** 4 years (B.Tech/B.E)
• **Entrance:** JEE Main/Advanced, State CETs
• **Investment:** ₹2-20 lakhs total
• **Starting Salary:** ₹3-8 LPA
• **Peak Salary:** ₹15-50+ LPA
• **Growth:** Rapid in emerging technologies

**🏥 MEDICAL:**
• **Duration:** 5.5 years (MBBS) + specialization
• **Entrance:** NEET (mandatory)
• **Investment:** ₹5-50 lakhs (varies by college type)
• **Starting Salary:** ₹4-8 LPA
• **Peak Salary:** ₹20-100+ LPA
• **Growth:** Steady, high social respect

**🎯 Choose Engineering If:**
• You love problem-solving and technology
• Want faster entry into job market
• Prefer diverse career options

**🎯 Choose Medical If:**
• You want to help people directly
• Can handle long study duration
• Don't mind intensive training

**📞 Need personalized guidance?** Call {phone_primary}"#;

pub const COMPARISON_TOOL: &str = r#"⚖️ **Career Comparison Tool Available!**

I can help you compare:
• **Career Fields** - Engineering vs Medical vs Business
• **Services** - FREE vs Premium features
• **Colleges** - Rankings, fees, placements
• **Career Paths** - Growth, salary, work-life balance

**🔗 Use Our Comparison Tool:** {base_url}/compare

**💡 Popular Comparisons:**
• Engineering vs Medical career paths
• FREE vs Premium service features
• Government vs Private colleges
• Traditional vs Emerging careers

**📞 Expert Comparison Guidance:** {phone_primary}

What specific comparison would you like me to help with?"#;

pub const SERVICE_INFORMATION: &str = r#"ℹ️ **Information about {title}**

**📝 Description:**
{description}

**✨ Key Features:**
{features}

**🔗 Access:** {url}
**💰 Type:** {tier}

**📞 Questions?** Call {phone_primary} | {phone_secondary}

Would you like more specific information about any aspect?"#;

pub const INFORMATION_HUB: &str = r#"ℹ️ **CareerGenAI Information Hub**

**🎯 What We Offer:**
• **10 Comprehensive Services** - Career assessment to resume building
• **AI-Powered Guidance** - Intelligent, personalized recommendations
• **Expert Support** - Human counselors for complex decisions
• **24/7 Availability** - Always here when you need guidance

**🆓 FREE Services (8):**
Career Assessment, Personality Quiz, Resume Builder, Career Counselling, Profile Builder, College Search, Career Comparison, AI Chatbot

**💎 Premium Services (2):**
Career Roadmaps, Premium Resume Builder

**🎓 Specializations:**
• Academic guidance and college selection
• Career discovery and planning
• Emotional support for students
• Professional development tools

**📞 Get Information:**
• Call: {phone_primary} | {phone_secondary}
• Chat: Ask me anything, anytime!
• Visit: {base_url}

What specific information are you looking for?"#;

pub const UNIVERSAL_HELP: &str = r#"🤗 **I'm your intelligent career assistant - here to help with everything!**

**🎯 I excel at helping with:**

**🎓 Academic Guidance:**
• "I got 85% which college should I go?" - Personalized recommendations
• "Engineering vs Medical - which is better?" - Detailed comparisons
• "I'm confused about my career" - Emotional support + guidance

**🛠️ Service Information:**
• "How does resume builder work?" - Step-by-step guidance
• "What services do you offer?" - Complete overview
• "Free vs Premium - what's the difference?" - Detailed comparison

**🤝 Instant Support:**
• 24/7 intelligent responses (that's me!)
• Direct expert access: {phone_primary} | {phone_secondary}
• Emotional support for career stress

What specific area can I help you with right now?"#;

pub const UNIVERSAL_CAREER: &str = r#"🚀 **Career Guidance - My Specialty!**

**🎯 I can help you with ANY career question:**

**🔍 Career Discovery:**
• Take FREE Career Assessment - Find your perfect match
• Personality Quiz - Understand your work style
• Career Comparison - Compare different paths

**📚 Education Planning:**
• College recommendations based on your percentage
• Stream selection (Engineering, Medical, Commerce, Arts)
• Entrance exam guidance (JEE, NEET, CAT, etc.)

**💼 Professional Development:**
• Resume building with ATS-friendly templates
• Interview preparation and tips
• Skill development recommendations

**🆓 FREE Tools Available:**
• Career Assessment ({base_url}/interest-form)
• Resume Builder ({base_url}/resume-templates)
• College Search ({base_url}/college)
• Expert Counselling ({base_url}/consult)

**📞 Expert Support:** {phone_primary} | {phone_secondary}

What career question is on your mind?"#;

pub const UNIVERSAL_SERVICES: &str = r#"🛠️ **CareerGenAI Complete Service Portfolio**

**🆓 FREE Services (8 total):**
1️⃣ **Career Assessment** - AI finds your perfect career match
2️⃣ **Personality Quiz** - Discover your work style & preferences
3️⃣ **Resume Builder** - Professional ATS-friendly templates
4️⃣ **Career Counselling** - One-on-one expert guidance sessions
5️⃣ **Profile Builder** - Complete career tracking system
6️⃣ **Top Colleges** - Search 10,000+ colleges database
7️⃣ **Career Comparison** - Side-by-side career analysis
8️⃣ **AI Chatbot** - 24/7 intelligent support (that's me!)

**💎 PREMIUM Services (2 total):**
9️⃣ **Career Roadmaps** - Step-by-step career guides
🔟 **Premium Resume Builder** - AI-powered with advanced features

**💰 Transparent Pricing:**
• **FREE Services:** 8 services, no hidden charges
• **Premium Plans:** ₹1,999 (1M) | ₹2,999 (3M) | ₹3,999 (1Y)

**🎁 BONUS:** FREE admission counselling for JEE, NEET, CAT

**📞 Support:** {phone_primary} | {phone_secondary}

Which service interests you most?"#;

/// Last resort reply. Always long enough to pass the minimum length check.
pub const WELCOME: &str = r#"🌟 **Welcome to CareerGenAI - Your Intelligent Career Partner!**

**🤖 I'm your AI assistant, ready to help with:**
• **Academic Guidance** - College recommendations, stream selection
• **Career Planning** - Assessment, exploration, roadmaps
• **Professional Tools** - Resume building, profile creation
• **Emotional Support** - When you're confused or stressed
• **Expert Connect** - Direct access to human counselors

**💬 I understand natural language - just ask me:**
• "I got 85% which college should I go?"
• "What career is right for me?"
• "I need help with resume building"
• "I'm confused about my future"
• "What services do you offer?"

**🆓 Everything starts FREE:**
• Career Assessment - Discover your perfect match
• Resume Builder - Professional templates
• College Search - 10,000+ institutions
• Expert Counselling - Human guidance when needed

**📞 Need immediate help?** Call {phone_primary} | {phone_secondary}

I'm here 24/7 to support your career journey. What's on your mind? 🚀"#;

pub const EMPATHY_GENERIC: &str =
    "🤗 I can sense you're going through a challenging time. You're not alone in this journey.";

pub const ENCOURAGEMENT: &str = r#"**🌟 Remember These Important Points:**
• **You're Not Alone** - Millions of students face similar challenges
• **Every Path is Valid** - There's no single "right" way to success
• **Setbacks are Temporary** - They don't define your future
• **Support is Available** - We're here to help you navigate this

**🎯 Let's Take Action Together:**
1. **Breathe & Reset** - Take a moment to center yourself
2. **Identify Your Strengths** - What are you naturally good at?
3. **Explore Options** - Let's look at all available paths
4. **Make a Plan** - Step-by-step approach to your goals

**🆓 FREE Support Available:**
• **Career Assessment** - Discover your strengths: {base_url}/interest-form
• **Expert Counselling** - Talk to professionals: {base_url}/consult
• **College Guidance** - Find the right fit: {base_url}/college

**📞 Immediate Support:** {phone_primary} | {phone_secondary}
*Our counselors are trained to help students through difficult times*

**💙 You've got this! Every successful person has faced moments of doubt. What matters is taking the next step forward.**

What specific area would you like to explore together?"#;

const ACADEMIC_FREE_SERVICES: &str = r#"**🆓 FREE Services:**
• **College Search Tool** - Explore 10,000+ colleges: {base_url}/college
• **Career Assessment** - Find your perfect match: {base_url}/interest-form
• **Expert Counselling** - Get professional guidance: {base_url}/consult

**📞 Need immediate help?** Call {phone_primary} | {phone_secondary}"#;

pub const ACADEMIC_CLARIFY: &str = r#"🎓 **I'd love to help you with college recommendations!**

To give you the best guidance, could you please share:
• Your percentage/marks (e.g., "I got 92%")
• Your preferred stream (Engineering, Medical, Commerce, etc.)
• Any location preferences (e.g., "colleges in Mumbai")

**Examples:**
• "I got 85% and want to study engineering in Delhi"
• "Best medical colleges in Mumbai"
• "Commerce colleges in Bangalore"

📞 **Need immediate guidance?** Call our FREE counselling: {phone_primary}"#;

/// `{stream}`, `{city}`, `{colleges}`, `{stream_key}`, `{city_key}`
pub fn academic_city_stream() -> String {
    format!(
        r#"🏛️ **Top {{stream}} Colleges in {{city}}**

**🎓 Premier Institutions:**
{{colleges}}

**📍 Location:** {{city}}
**🎯 Field:** {{stream}}

**💡 For Personalized Recommendations:**
Share your percentage/marks for specific college suggestions!
Example: "I got 85% and want to study {{stream_key}} in {{city_key}}"

{ACADEMIC_FREE_SERVICES}"#
    )
}

/// `{city}`, `{streams}`, `{city_key}`
pub fn academic_city_all() -> String {
    format!(
        r#"🏛️ **Best Colleges in {{city}}**

{{streams}}

**📍 Location:** {{city}}
**🎯 Coverage:** All major streams

**💡 For Specific Recommendations:**
• Share your stream: "Engineering colleges in {{city_key}}"
• Share your percentage: "I got 85% in {{city_key}}"

{ACADEMIC_FREE_SERVICES}"#
    )
}

/// `{stream}`, `{colleges}`, `{entrance}`, `{description}`, `{stream_key}`
pub fn academic_stream_overview() -> String {
    format!(
        r#"🎓 **Top Colleges for {{stream}}**

**🏛️ Premier Institutions:**
{{colleges}}

**📝 Entrance Exam:** {{entrance}}
**💡 About {{stream}}:** {{description}}

**🎯 For Personalized Recommendations:**
Share your percentage/marks for specific college suggestions!
Example: "I got 85% in {{stream_key}}"

{ACADEMIC_FREE_SERVICES}"#
    )
}

/// `{percentage}`
pub const ACADEMIC_MULTI_PATH: &str = r#"🎓 **Personalized College Guidance for {percentage}%**

🌟 Multiple career paths are open to you.

**🎯 Choose Your Path:**

**🔧 ENGINEERING Path:**
• **Top Options:** IIT Roorkee, IIT Guwahati, NIT Trichy, NIT Warangal, BITS Pilani
• **Entrance:** JEE Main
• **Careers:** Software Engineer, Data Scientist, AI Engineer

**🩺 MEDICAL Path:**
• **Top Options:** AIIMS Jodhpur, AIIMS Bhubaneswar, Government Medical Colleges
• **Entrance:** NEET
• **Careers:** Doctor, Surgeon, Medical Researcher

**📊 COMMERCE/BUSINESS Path:**
• **Top Options:** SRCC Delhi, LSR Delhi, St. Xavier's Mumbai, Christ Bangalore
• **Entrance:** University entrance exams
• **Careers:** CA, MBA, Business Manager, Financial Analyst

**🎨 OTHER PATHS:**
• **Law:** CLAT for top NLUs
• **Design:** NIFT, NID entrance
• **Science:** BSc from top universities

**💡 Next Steps:**
1. **Identify Your Interest** - Take our FREE Career Assessment: {base_url}/interest-form
2. **Apply Strategically** - Don't wait for results, apply early
3. **Backup Options** - Apply to multiple streams/colleges
4. **Expert Guidance** - Book FREE counselling: {base_url}/consult

**📞 Need personalized guidance?** Call {phone_primary} | {phone_secondary}

Which field interests you most? I can provide specific guidance! 🌟"#;

/// `{message}`, `{stream}`, `{location_suffix}`, `{colleges}`, `{cutoffs}`,
/// `{band}`, `{location_focus}`
pub const ACADEMIC_BAND: &str = r#"🎓 **{message}**

**🏛️ Top Recommended Colleges for {stream}{location_suffix}:**
{colleges}

**📊 Expected Cutoffs:** {cutoffs}
**🎯 Your Category:** {band}% range
{location_focus}
**💡 Next Steps:**
1. **Apply Early** - Don't wait for results
2. **Backup Options** - Apply to multiple colleges
3. **Entrance Exams** - Prepare for relevant tests
4. **Documentation** - Keep all certificates ready

**🆓 FREE Services to Help You:**
• **College Search Tool** - Find more options: {base_url}/college
• **Career Assessment** - Confirm your interests: {base_url}/interest-form
• **Expert Counselling** - Book session: {base_url}/consult

**📞 Need personalized guidance?** Call {phone_primary} | {phone_secondary}

Remember: Your percentage is just one factor. With the right strategy, you can get into an excellent college! 🌟"#;

/// Reply used when the engine fails internally.
pub const APOLOGY: &str = "I'm experiencing some technical difficulties. Could you please rephrase your question or ask about our services?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_all_occurrences() {
        let out = render("{a} and {a} but {b}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and x but y");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let out = render("hello {name}", &[("other", "x")]);
        assert_eq!(out, "hello {name}");
    }

    #[test]
    fn test_academic_builders_keep_placeholders() {
        let city = academic_city_stream();
        assert!(city.contains("{city}"));
        assert!(city.contains("{colleges}"));
        assert!(city.contains("{base_url}/college"));
        assert!(!city.contains("{{"));

        assert!(academic_city_all().contains("{streams}"));
        assert!(academic_stream_overview().contains("{entrance}"));
    }

    #[test]
    fn test_fallback_templates_clear_minimum_length() {
        for t in [WELCOME, UNIVERSAL_HELP, UNIVERSAL_CAREER, UNIVERSAL_SERVICES] {
            assert!(t.chars().count() >= 50);
        }
    }
}
